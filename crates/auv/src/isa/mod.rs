//! Architectural definitions: CSR addresses and address-space rules.

pub mod addr;
pub mod csr;
