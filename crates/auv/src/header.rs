//! Source renderings of the CSR map.
//!
//! The ROM is built from C and assembly, so the table is emitted as an
//! include-guarded C header or as a list of `.equ` directives.

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::HeaderConfig;
use crate::error::AuvError;
use crate::isa::csr::Csr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderFormat {
    #[default]
    C,
    Asm,
}

impl FromStr for HeaderFormat {
    type Err = AuvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "h" => Ok(HeaderFormat::C),
            "asm" | "s" => Ok(HeaderFormat::Asm),
            other => Err(AuvError::InvalidConfig(format!(
                "unknown header format '{}'",
                other
            ))),
        }
    }
}

/// Emitted name for `csr` under `prefix`, e.g. `CSR_MSTATUS`.
pub fn symbol(csr: Csr, prefix: &str) -> String {
    format!("{}{}", prefix, csr.mnemonic().to_ascii_uppercase())
}

/// Renders the map in `config.format`.
pub fn render(config: &HeaderConfig) -> Result<String, AuvError> {
    config.validate()?;
    debug!("rendering {} registers as {:?}", Csr::ALL.len(), config.format);

    let symbols: Vec<(String, Csr)> = Csr::ALL
        .into_iter()
        .map(|csr| (symbol(csr, &config.prefix), csr))
        .collect();
    let width = symbols.iter().map(|(s, _)| s.len()).max().unwrap_or(0);

    let mut out = String::new();
    match config.format {
        HeaderFormat::C => {
            out.push_str(&format!("#ifndef {}\n", config.guard));
            out.push_str(&format!("#define {}\n\n", config.guard));
            for (sym, csr) in &symbols {
                out.push_str(&format!("#define {:<width$} {}\n", sym, csr.addr()));
            }
            out.push_str("\n#endif\n");
        }
        HeaderFormat::Asm => {
            for (sym, csr) in &symbols {
                out.push_str(&format!(".equ {}, {}\n", sym, csr.addr()));
            }
        }
    }
    Ok(out)
}
