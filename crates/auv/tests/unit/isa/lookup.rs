//! Lookup tests for the typed CSR view.

use auv::{AuvError, Csr};
use rstest::rstest;

#[rstest]
#[case("CSR_MSTATUS", Csr::Mstatus)]
#[case("csr_mstatus", Csr::Mstatus)]
#[case("mstatus", Csr::Mstatus)]
#[case("MISA", Csr::Misa)]
#[case("  mtvec ", Csr::Mtvec)]
#[case("0x341", Csr::Mepc)]
#[case("0X342", Csr::Mcause)]
#[case("836", Csr::Mip)]
#[case("0xfc0", Csr::Intce)]
#[case("0xFC1", Csr::Intcp)]
#[case("intct", Csr::Intct)]
fn test_parse_query(#[case] query: &str, #[case] expected: Csr) {
    assert_eq!(query.parse::<Csr>().unwrap(), expected);
}

#[rstest]
#[case("mscratch")]
#[case("0x340")]
#[case("0xzz")]
#[case("0x+344")]
#[case("0x")]
#[case("+836")]
#[case("CSR_")]
fn test_parse_unknown(#[case] query: &str) {
    match query.parse::<Csr>() {
        Err(AuvError::UnknownCsr(q)) => assert_eq!(q, query),
        other => panic!("expected UnknownCsr, got {:?}", other),
    }
}

#[test]
fn test_from_address_round_trips_every_register() {
    for csr in Csr::ALL {
        assert_eq!(Csr::from_address(csr.address()), Some(csr));
        assert_eq!(csr.name().parse::<Csr>().unwrap(), csr);
    }
    assert_eq!(Csr::from_address(0x343), None);
}

#[test]
fn test_display_is_mnemonic() {
    assert_eq!(Csr::Mcause.to_string(), "mcause");
    assert_eq!(Csr::Intce.to_string(), "intce");
}

#[test]
fn test_serde_uses_mnemonic() {
    assert_eq!(serde_json::to_string(&Csr::Mtvec).unwrap(), "\"mtvec\"");
    let csr: Csr = serde_json::from_str("\"intcp\"").unwrap();
    assert_eq!(csr, Csr::Intcp);
}

#[test]
fn test_entry_json_shape() {
    let value = serde_json::to_value(Csr::Intct.entry()).unwrap();
    assert_eq!(value["name"], "CSR_INTCT");
    assert_eq!(value["address"], 0xfc2);
    assert_eq!(value["privilege"], "machine");
    assert_eq!(value["access"], "read-only");
    assert_eq!(value["custom"], true);
}
