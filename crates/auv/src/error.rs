use std::fmt;
use std::io;

/// Errors raised while resolving, rendering, or exporting the CSR map.
#[derive(Debug)]
pub enum AuvError {
    /// A query did not name any register in the map.
    UnknownCsr(String),
    /// A value does not fit the 12-bit CSR address space.
    AddressOutOfRange(u32),
    /// Configuration was readable but semantically wrong.
    InvalidConfig(String),
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for AuvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuvError::UnknownCsr(query) => write!(f, "unknown CSR '{}'", query),
            AuvError::AddressOutOfRange(addr) => {
                write!(f, "address {:#x} exceeds the 12-bit CSR space", addr)
            }
            AuvError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            AuvError::Io(e) => write!(f, "I/O error: {}", e),
            AuvError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for AuvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuvError::Io(e) => Some(e),
            AuvError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AuvError {
    fn from(e: io::Error) -> Self {
        AuvError::Io(e)
    }
}

impl From<serde_json::Error> for AuvError {
    fn from(e: serde_json::Error) -> Self {
        AuvError::Json(e)
    }
}
