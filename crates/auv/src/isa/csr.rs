//! CSR addresses used by the test ROM.
//!
//! The raw `CSR_*` constants are the contract shared with the ROM sources;
//! [`Csr`] is the typed view used everywhere else in the crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuvError;
use crate::isa::addr::{Access, CsrAddr, PrivilegeMode};

// Machine Trap Setup
pub const CSR_MSTATUS: u32 = 0x300;
pub const CSR_MISA: u32 = 0x301;
pub const CSR_MTVEC: u32 = 0x305;

// Machine Trap Handling
pub const CSR_MEPC: u32 = 0x341;
pub const CSR_MCAUSE: u32 = 0x342;
pub const CSR_MIP: u32 = 0x344;

// Interrupt controller (custom, machine read-only window)
pub const CSR_INTCE: u32 = 0xfc0;
pub const CSR_INTCP: u32 = 0xfc1;
pub const CSR_INTCT: u32 = 0xfc2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Csr {
    Mstatus,
    Misa,
    Mtvec,
    Mepc,
    Mcause,
    Mip,
    Intce,
    Intcp,
    Intct,
}

impl Csr {
    pub const ALL: [Csr; 9] = [
        Csr::Mstatus,
        Csr::Misa,
        Csr::Mtvec,
        Csr::Mepc,
        Csr::Mcause,
        Csr::Mip,
        Csr::Intce,
        Csr::Intcp,
        Csr::Intct,
    ];

    pub const fn address(self) -> u32 {
        match self {
            Csr::Mstatus => CSR_MSTATUS,
            Csr::Misa => CSR_MISA,
            Csr::Mtvec => CSR_MTVEC,
            Csr::Mepc => CSR_MEPC,
            Csr::Mcause => CSR_MCAUSE,
            Csr::Mip => CSR_MIP,
            Csr::Intce => CSR_INTCE,
            Csr::Intcp => CSR_INTCP,
            Csr::Intct => CSR_INTCT,
        }
    }

    pub const fn addr(self) -> CsrAddr {
        CsrAddr::from_raw(self.address() as u16)
    }

    /// Symbolic name as spelled in ROM sources, e.g. `CSR_MSTATUS`.
    pub const fn name(self) -> &'static str {
        match self {
            Csr::Mstatus => "CSR_MSTATUS",
            Csr::Misa => "CSR_MISA",
            Csr::Mtvec => "CSR_MTVEC",
            Csr::Mepc => "CSR_MEPC",
            Csr::Mcause => "CSR_MCAUSE",
            Csr::Mip => "CSR_MIP",
            Csr::Intce => "CSR_INTCE",
            Csr::Intcp => "CSR_INTCP",
            Csr::Intct => "CSR_INTCT",
        }
    }

    /// Assembler mnemonic, e.g. `mstatus`.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Csr::Mstatus => "mstatus",
            Csr::Misa => "misa",
            Csr::Mtvec => "mtvec",
            Csr::Mepc => "mepc",
            Csr::Mcause => "mcause",
            Csr::Mip => "mip",
            Csr::Intce => "intce",
            Csr::Intcp => "intcp",
            Csr::Intct => "intct",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Csr::Mstatus => "Machine status register",
            Csr::Misa => "Machine ISA register",
            Csr::Mtvec => "Machine trap vector base",
            Csr::Mepc => "Machine exception PC",
            Csr::Mcause => "Machine trap cause",
            Csr::Mip => "Machine interrupt pending",
            Csr::Intce => "Interrupt controller enable",
            Csr::Intcp => "Interrupt controller pending",
            Csr::Intct => "Interrupt controller trigger",
        }
    }

    pub fn from_address(addr: u32) -> Option<Csr> {
        Csr::ALL.into_iter().find(|csr| csr.address() == addr)
    }

    pub fn entry(self) -> CsrEntry {
        let addr = self.addr();
        CsrEntry {
            name: self.name().to_string(),
            mnemonic: self.mnemonic().to_string(),
            address: addr.val(),
            privilege: addr.privilege(),
            access: addr.access(),
            custom: addr.is_custom(),
            description: self.description().to_string(),
        }
    }
}

fn parse_address(s: &str) -> Option<u32> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok()
    } else if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

impl FromStr for Csr {
    type Err = AuvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = s.trim();
        if let Some(addr) = parse_address(query) {
            return Csr::from_address(addr).ok_or_else(|| AuvError::UnknownCsr(s.to_string()));
        }

        let lower = query.to_ascii_lowercase();
        let mnemonic = lower.strip_prefix("csr_").unwrap_or(&lower);
        Csr::ALL
            .into_iter()
            .find(|csr| csr.mnemonic() == mnemonic)
            .ok_or_else(|| AuvError::UnknownCsr(s.to_string()))
    }
}

impl fmt::Display for Csr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Flattened, serializable description of one register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrEntry {
    pub name: String,
    pub mnemonic: String,
    pub address: u32,
    pub privilege: PrivilegeMode,
    pub access: Access,
    pub custom: bool,
    pub description: String,
}
