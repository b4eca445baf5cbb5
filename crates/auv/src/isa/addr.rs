//! 12-bit CSR address space.
//!
//! The privileged architecture encodes access rules in the address itself:
//! bits [11:10] mark read-only registers and bits [9:8] give the lowest
//! privilege level allowed to touch the register. A handful of windows are
//! reserved for custom (non-standard) registers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AuvError;

/// Highest address representable in the 12-bit CSR field.
pub const CSR_ADDR_MAX: u32 = 0xFFF;

/// Custom CSR windows, inclusive on both ends.
const CUSTOM_RANGES: [(u16, u16); 11] = [
    (0x800, 0x8FF),
    (0xCC0, 0xCFF),
    (0x5C0, 0x5FF),
    (0x9C0, 0x9FF),
    (0xDC0, 0xDFF),
    (0x6C0, 0x6FF),
    (0xAC0, 0xAFF),
    (0xEC0, 0xEFF),
    (0x7C0, 0x7FF),
    (0xBC0, 0xBFF),
    (0xFC0, 0xFFF),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivilegeMode {
    User = 0,
    Supervisor = 1,
    Hypervisor = 2,
    Machine = 3,
}

impl PrivilegeMode {
    pub fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => PrivilegeMode::User,
            1 => PrivilegeMode::Supervisor,
            2 => PrivilegeMode::Hypervisor,
            _ => PrivilegeMode::Machine,
        }
    }
}

impl fmt::Display for PrivilegeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PrivilegeMode::User => "U",
            PrivilegeMode::Supervisor => "S",
            PrivilegeMode::Hypervisor => "H",
            PrivilegeMode::Machine => "M",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    ReadWrite,
    ReadOnly,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::ReadWrite => f.write_str("RW"),
            Access::ReadOnly => f.write_str("RO"),
        }
    }
}

/// A validated CSR address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CsrAddr(u16);

impl CsrAddr {
    pub fn new(addr: u32) -> Result<Self, AuvError> {
        if addr > CSR_ADDR_MAX {
            return Err(AuvError::AddressOutOfRange(addr));
        }
        Ok(Self(addr as u16))
    }

    /// Only for addresses already known to fit; the table constants use it.
    pub(crate) const fn from_raw(addr: u16) -> Self {
        Self(addr & CSR_ADDR_MAX as u16)
    }

    #[inline(always)]
    pub fn val(&self) -> u32 {
        self.0 as u32
    }

    pub fn privilege(&self) -> PrivilegeMode {
        PrivilegeMode::from_bits(self.0 >> 8)
    }

    pub fn access(&self) -> Access {
        if (self.0 >> 10) & 0b11 == 0b11 {
            Access::ReadOnly
        } else {
            Access::ReadWrite
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.access() == Access::ReadOnly
    }

    pub fn is_custom(&self) -> bool {
        CUSTOM_RANGES
            .iter()
            .any(|&(lo, hi)| (lo..=hi).contains(&self.0))
    }
}

impl TryFrom<u32> for CsrAddr {
    type Error = AuvError;

    fn try_from(addr: u32) -> Result<Self, Self::Error> {
        CsrAddr::new(addr)
    }
}

impl From<CsrAddr> for u32 {
    fn from(addr: CsrAddr) -> u32 {
        addr.val()
    }
}

impl fmt::Display for CsrAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x}", self.0)
    }
}
