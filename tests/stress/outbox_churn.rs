//! Stress test: outbox logs under heavy enable/disable churn.
//!
//! Logs are never compacted, so their raw length tracks every enable while
//! enumeration must keep returning only live, de-duplicated grants.

use alloy_primitives::{Address, U256};

use delegate_registry::{DelegateRegistry, RegistryConfig, Rights};

fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

#[test]
fn stress_toggle_same_grant_10_000_times() {
    let vault = addr(1);
    let delegate = addr(2);
    let mut registry = DelegateRegistry::new();

    for i in 0..10_000 {
        registry.delegate_for_all(vault, delegate, Rights::WILDCARD, i % 2 == 0);
    }

    // 5_000 enables, each appended.
    assert_eq!(registry.outbox_len_for_vault(vault), 5_000);
    assert_eq!(registry.outbox_len_for_delegate(delegate), 5_000);
    // Last write (i = 9_999) was a disable.
    assert!(registry.delegations_for_vault(vault).is_empty());

    registry.delegate_for_all(vault, delegate, Rights::WILDCARD, true);
    assert_eq!(registry.delegations_for_vault(vault).len(), 1);
    assert_eq!(registry.store().len(), 1);
}

#[test]
fn stress_many_delegates_partial_revocation() {
    let vault = addr(1);
    let contract = addr(3);
    let mut registry = DelegateRegistry::new();

    let delegates: Vec<Address> = (0..1_000u32)
        .map(|i| {
            let mut bytes = [0u8; 20];
            bytes[16..].copy_from_slice(&(i + 1).to_be_bytes());
            Address::from(bytes)
        })
        .collect();

    for (i, delegate) in delegates.iter().enumerate() {
        registry.delegate_for_erc721(
            vault,
            *delegate,
            contract,
            U256::from(i as u64),
            Rights::WILDCARD,
            true,
        );
    }
    for (i, delegate) in delegates.iter().enumerate().filter(|(i, _)| i % 4 == 0) {
        registry.delegate_for_erc721(
            vault,
            *delegate,
            contract,
            U256::from(i as u64),
            Rights::WILDCARD,
            false,
        );
    }

    let live = registry.delegations_for_vault(vault);
    assert_eq!(live.len(), 750);
    assert_eq!(registry.outbox_len_for_vault(vault), 1_000);

    // First-enable order survives filtering.
    let ids: Vec<U256> = live.iter().map(|r| r.token_id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[test]
fn stress_scan_over_threshold_still_complete() {
    let config = RegistryConfig {
        outbox_scan_warn_threshold: 8,
        ..RegistryConfig::default()
    };
    let vault = addr(1);
    let mut registry = DelegateRegistry::with_config(config);

    for i in 0..64u64 {
        registry.delegate_for_erc20(
            vault,
            addr(2),
            addr(3),
            U256::from(i),
            Rights::WILDCARD,
            true,
        );
    }

    // Over the warning threshold nothing is dropped.
    let live = registry.delegations_for_vault(vault);
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].balance, U256::from(63u64));
    assert_eq!(registry.outbox_len_for_vault(vault), 64);
}
