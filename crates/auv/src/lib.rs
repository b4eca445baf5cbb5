//! CSR address map for the AUV test ROM.
//!
//! The test ROM and the simulator agree on a small set of control/status
//! register addresses: six standard RISC-V machine registers plus three
//! custom interrupt-controller registers. This crate owns that table and
//! the tooling around it:
//!
//! * [`isa::csr`] - the raw constants and the typed [`Csr`] view,
//! * [`isa::addr`] - classification of 12-bit CSR addresses,
//! * [`header`] - text renderers for the C and assembler toolchains,
//! * [`config`] - render configuration,
//! * [`error`] - the crate-wide error type.

pub mod config;
pub mod error;
pub mod header;
pub mod isa;

pub use config::HeaderConfig;
pub use error::AuvError;
pub use header::HeaderFormat;
pub use isa::addr::{Access, CsrAddr, PrivilegeMode};
pub use isa::csr::{Csr, CsrEntry};
