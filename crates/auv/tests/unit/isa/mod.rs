//! # ISA Unit Tests
//!
//! Verifies the CSR address table and the rules of the 12-bit address space.


/// Parsing and formatting of the typed `Csr` view.
pub mod lookup;

/// Privilege, access, and custom-window classification of addresses.
pub mod address_space;
