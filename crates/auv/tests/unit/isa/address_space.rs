//! Address-space classification tests.

use auv::isa::addr::CSR_ADDR_MAX;
use auv::{Access, AuvError, Csr, CsrAddr, PrivilegeMode};
use proptest::prelude::*;

#[test]
fn test_standard_machine_registers() {
    for csr in [
        Csr::Mstatus,
        Csr::Misa,
        Csr::Mtvec,
        Csr::Mepc,
        Csr::Mcause,
        Csr::Mip,
    ] {
        let addr = csr.addr();
        assert_eq!(addr.privilege(), PrivilegeMode::Machine, "{}", csr);
        assert_eq!(addr.access(), Access::ReadWrite, "{}", csr);
        assert!(!addr.is_custom(), "{}", csr);
    }
}

#[test]
fn test_interrupt_controller_registers() {
    for csr in [Csr::Intce, Csr::Intcp, Csr::Intct] {
        let addr = csr.addr();
        assert_eq!(addr.privilege(), PrivilegeMode::Machine, "{}", csr);
        assert!(addr.is_read_only(), "{}", csr);
        assert!(addr.is_custom(), "{}", csr);
    }
}

#[test]
fn test_custom_window_edges() {
    let custom = |a: u32| CsrAddr::new(a).unwrap().is_custom();
    assert!(custom(0x800));
    assert!(custom(0x8FF));
    assert!(!custom(0x900));
    assert!(custom(0x7C0));
    assert!(!custom(0x7BF));
    assert!(custom(0xFFF));
    assert!(!custom(0xFBF));
}

#[test]
fn test_serde_rejects_wide_address() {
    let addr: CsrAddr = serde_json::from_str("772").unwrap();
    assert_eq!(addr.val(), 0x304);
    assert!(serde_json::from_str::<CsrAddr>("4096").is_err());
}

proptest! {
    #[test]
    fn prop_new_accepts_exactly_twelve_bits(raw in any::<u32>()) {
        match CsrAddr::new(raw) {
            Ok(addr) => {
                prop_assert!(raw <= CSR_ADDR_MAX);
                prop_assert_eq!(addr.val(), raw);
            }
            Err(AuvError::AddressOutOfRange(a)) => {
                prop_assert!(raw > CSR_ADDR_MAX);
                prop_assert_eq!(a, raw);
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    #[test]
    fn prop_classification_follows_bit_fields(raw in 0u32..=CSR_ADDR_MAX) {
        let addr = CsrAddr::new(raw).unwrap();
        prop_assert_eq!(addr.privilege() as u32, (raw >> 8) & 0b11);
        prop_assert_eq!(addr.is_read_only(), (raw >> 10) & 0b11 == 0b11);
    }
}
