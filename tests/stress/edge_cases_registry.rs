//! Edge-case tests: boundary values, self-delegation, odd inputs.

use alloy_primitives::{Address, B256, U256};

use delegate_registry::{DelegateRegistry, Fingerprint, RecordCell, RegistryError, Rights};

fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

#[test]
fn edge_disable_never_enabled_is_harmless() {
    let mut registry = DelegateRegistry::new();
    registry.delegate_for_erc1155(
        addr(1),
        addr(2),
        addr(3),
        U256::from(1u64),
        U256::from(1u64),
        Rights::from_label("x").unwrap(),
        false,
    );

    assert!(registry.store().is_empty());
    assert_eq!(registry.outbox_len_for_vault(addr(1)), 0);
    assert_eq!(registry.events().len(), 1);
}

#[test]
fn edge_self_delegation() {
    let me = addr(7);
    let mut registry = DelegateRegistry::new();
    let fp = registry.delegate_for_all(me, me, Rights::WILDCARD, true);

    assert!(registry.check_delegate_for_all(me, me, Rights::WILDCARD));
    assert_eq!(registry.outgoing_fingerprints(me), vec![fp]);
    assert_eq!(registry.incoming_fingerprints(me), vec![fp]);
}

#[test]
fn edge_max_values_roundtrip_through_cells() {
    let mut registry = DelegateRegistry::new();
    let max_addr = Address::repeat_byte(0xff);
    let fp = registry.delegate_for_erc1155(
        max_addr,
        max_addr,
        max_addr,
        U256::MAX,
        U256::MAX,
        Rights(B256::repeat_byte(0xff)),
        true,
    );

    let record = registry.delegation(&fp).unwrap();
    assert_eq!(record.token_id, U256::MAX);
    assert_eq!(record.balance, U256::MAX);
    assert_eq!(record.contract, max_addr);
    assert_eq!(record.rights, Rights(B256::repeat_byte(0xff)));
}

#[test]
fn edge_zero_balance_grant_is_live_but_worthless() {
    let mut registry = DelegateRegistry::new();
    registry.delegate_for_erc20(addr(1), addr(2), addr(3), U256::ZERO, Rights::WILDCARD, true);

    assert_eq!(registry.delegations_for_vault(addr(1)).len(), 1);
    assert_eq!(
        registry.check_delegate_for_erc20(addr(2), addr(1), addr(3), Rights::WILDCARD),
        U256::ZERO
    );
}

#[test]
fn edge_unknown_fingerprint_reads_zero() {
    let registry = DelegateRegistry::new();
    let fp = Fingerprint(B256::repeat_byte(0x5a));
    let loc = registry.location_of(&fp);

    for cell in RecordCell::ALL {
        assert_eq!(registry.read_cell(&loc, cell), B256::ZERO);
    }
    assert!(registry.delegation(&fp).is_none());
    assert!(matches!(fp.shape(), Err(RegistryError::UnknownShapeTag(0x5a))));
}

#[test]
fn edge_rights_label_limits() {
    assert!(Rights::from_label(&"a".repeat(32)).is_ok());
    assert!(matches!(
        Rights::from_label(&"a".repeat(33)),
        Err(RegistryError::InvalidRights(_))
    ));
}

#[test]
fn edge_distinct_rights_are_distinct_grants() {
    let mut registry = DelegateRegistry::new();
    let a = registry.delegate_for_all(addr(1), addr(2), Rights::from_label("a").unwrap(), true);
    let b = registry.delegate_for_all(addr(1), addr(2), Rights::from_label("b").unwrap(), true);
    assert_ne!(a, b);

    registry.delegate_for_all(addr(1), addr(2), Rights::from_label("a").unwrap(), false);
    assert!(!registry.check_delegate_for_all(addr(2), addr(1), Rights::from_label("a").unwrap()));
    assert!(registry.check_delegate_for_all(addr(2), addr(1), Rights::from_label("b").unwrap()));
}

#[test]
fn edge_same_token_different_contracts() {
    let mut registry = DelegateRegistry::new();
    let id = U256::from(1u64);
    registry.delegate_for_erc721(addr(1), addr(2), addr(3), id, Rights::WILDCARD, true);

    assert!(registry.check_delegate_for_erc721(addr(2), addr(1), addr(3), id, Rights::WILDCARD));
    assert!(!registry.check_delegate_for_erc721(addr(2), addr(1), addr(4), id, Rights::WILDCARD));
    assert!(!registry.check_delegate_for_erc721(
        addr(2),
        addr(1),
        addr(3),
        U256::from(2u64),
        Rights::WILDCARD
    ));
}
