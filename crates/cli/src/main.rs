//! Command-line access to the AUV CSR map.

use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use std::path::PathBuf;
use std::{fs, process};

use auv::header;
use auv::{AuvError, Csr, CsrEntry, HeaderConfig, HeaderFormat};

#[derive(Parser, Debug)]
#[command(
    name = "auv",
    author,
    version,
    about = "Inspect and export the AUV test ROM CSR map",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every register in the map.
    List {
        /// Print a JSON array instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Resolve one register by name, mnemonic, or address.
    Lookup {
        /// e.g. `CSR_MEPC`, `mepc`, `0x341`.
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Emit the map as a C header or assembler include.
    Header {
        /// Output format (overrides the config file).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// JSON render configuration.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    C,
    Asm,
}

impl From<FormatArg> for HeaderFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::C => HeaderFormat::C,
            FormatArg::Asm => HeaderFormat::Asm,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::List { json } => cmd_list(json),
        Command::Lookup { query, json } => cmd_lookup(&query, json),
        Command::Header {
            format,
            config,
            output,
        } => cmd_header(format, config, output),
    };

    if let Err(e) = result {
        eprintln!("\x1b[1;31m[!] error:\x1b[0m {}", e);
        process::exit(1);
    }
}

fn print_table(entries: &[CsrEntry]) {
    println!(
        "{:<12} {:<6} {:<5} {:<3} {:<7} {}",
        "NAME", "ADDR", "PRIV", "RW", "CUSTOM", "DESCRIPTION"
    );
    for e in entries {
        println!(
            "{:<12} {:#05x}  {:<5} {:<3} {:<7} {}",
            e.name,
            e.address,
            e.privilege.to_string(),
            e.access.to_string(),
            if e.custom { "yes" } else { "no" },
            e.description
        );
    }
}

fn list_json() -> Result<String, AuvError> {
    let entries: Vec<CsrEntry> = Csr::ALL.into_iter().map(Csr::entry).collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

fn cmd_list(json: bool) -> Result<(), AuvError> {
    if json {
        println!("{}", list_json()?);
    } else {
        let entries: Vec<CsrEntry> = Csr::ALL.into_iter().map(Csr::entry).collect();
        print_table(&entries);
    }
    Ok(())
}

fn lookup_entry(query: &str) -> Result<CsrEntry, AuvError> {
    let csr: Csr = query.parse()?;
    debug!("'{}' resolved to {}", query, csr);
    Ok(csr.entry())
}

fn cmd_lookup(query: &str, json: bool) -> Result<(), AuvError> {
    let entry = lookup_entry(query)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        print_table(std::slice::from_ref(&entry));
    }
    Ok(())
}

fn cmd_header(
    format: Option<FormatArg>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), AuvError> {
    let mut config = match config {
        Some(path) => HeaderConfig::from_file(path)?,
        None => HeaderConfig::default(),
    };
    if let Some(format) = format {
        config.format = format.into();
    }
    let text = header::render(&config)?;

    match output {
        Some(path) => {
            fs::write(&path, text)?;
            eprintln!("[*] Wrote {:?} header to {}", config.format, path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
