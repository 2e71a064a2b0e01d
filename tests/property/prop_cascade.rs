use std::collections::{HashMap, HashSet};

use alloy_primitives::{Address, U256};
use proptest::prelude::*;

use delegate_registry::{DelegateRegistry, DelegationRequest, Fingerprint, Rights, Scope};

/// One write against a small universe of principals, assets and rights.
#[derive(Debug, Clone)]
struct Op {
    shape: u8,
    vault: u8,
    delegate: u8,
    contract: u8,
    token: u8,
    rights: u8,
    balance: u64,
    enable: bool,
}

fn arb_op() -> impl Strategy<Value = Op> {
    (0u8..5, 1u8..=3, 1u8..=3, 1u8..=2, 0u8..2, 0u8..2, 0u64..1_000, any::<bool>()).prop_map(
        |(shape, vault, delegate, contract, token, rights, balance, enable)| Op {
            shape,
            vault,
            delegate,
            contract,
            token,
            rights,
            balance,
            enable,
        },
    )
}

fn addr(i: u8) -> Address {
    Address::repeat_byte(i)
}

fn contract_addr(i: u8) -> Address {
    Address::repeat_byte(0x80 + i)
}

fn rights(i: u8) -> Rights {
    if i == 0 {
        Rights::WILDCARD
    } else {
        Rights::from_label("gov").unwrap()
    }
}

fn request(op: &Op) -> DelegationRequest {
    let delegate = addr(op.delegate);
    let contract = contract_addr(op.contract);
    let token_id = U256::from(op.token);
    let balance = U256::from(op.balance);
    let r = rights(op.rights);
    match op.shape {
        0 => DelegationRequest::all(delegate, r, op.enable),
        1 => DelegationRequest::contract(delegate, contract, r, op.enable),
        2 => DelegationRequest::erc721(delegate, contract, token_id, r, op.enable),
        3 => DelegationRequest::erc20(delegate, contract, balance, r, op.enable),
        _ => DelegationRequest::erc1155(delegate, contract, token_id, balance, r, op.enable),
    }
}

/// Apply `ops` to a registry and to a plain model of live grants.
fn run(ops: &[Op]) -> (DelegateRegistry, HashMap<Fingerprint, (Address, DelegationRequest)>) {
    let mut registry = DelegateRegistry::new();
    let mut model = HashMap::new();
    for op in ops {
        let vault = addr(op.vault);
        let req = request(op);
        let fp = registry.apply(vault, &req);
        if req.enable {
            model.insert(fp, (vault, req));
        } else {
            model.remove(&fp);
        }
    }
    (registry, model)
}

fn live_in_model(
    model: &HashMap<Fingerprint, (Address, DelegationRequest)>,
    scope: &Scope,
    vault: Address,
    delegate: Address,
    r: Rights,
) -> bool {
    model.contains_key(&Fingerprint::compute(scope, vault, delegate, r))
}

proptest! {
    /// Enumeration returns exactly the live grants, each once.
    #[test]
    fn prop_enumeration_matches_model(ops in prop::collection::vec(arb_op(), 0..60)) {
        let (registry, model) = run(&ops);

        for v in 1u8..=3 {
            let vault = addr(v);
            let listed = registry.outgoing_fingerprints(vault);
            let unique: HashSet<Fingerprint> = listed.iter().copied().collect();
            prop_assert_eq!(unique.len(), listed.len());

            let expected: HashSet<Fingerprint> = model
                .iter()
                .filter(|(_, (owner, _))| *owner == vault)
                .map(|(fp, _)| *fp)
                .collect();
            prop_assert_eq!(unique, expected);

            for record in registry.delegations_for_vault(vault) {
                prop_assert_eq!(record.vault, vault);
                prop_assert!(model.contains_key(&record.fingerprint()));
            }
        }

        for d in 1u8..=3 {
            let delegate = addr(d);
            let listed: HashSet<Fingerprint> =
                registry.incoming_fingerprints(delegate).into_iter().collect();
            let expected: HashSet<Fingerprint> = model
                .iter()
                .filter(|(_, (_, req))| req.delegate == delegate)
                .map(|(fp, _)| *fp)
                .collect();
            prop_assert_eq!(listed, expected);
        }
    }

    /// Broader checks imply narrower ones; ceilings follow the cascade.
    #[test]
    fn prop_cascade_monotone(ops in prop::collection::vec(arb_op(), 0..60)) {
        let (registry, _) = run(&ops);

        for v in 1u8..=3 {
            for d in 1u8..=3 {
                for c in 1u8..=2 {
                    for r in 0u8..2 {
                        let (vault, delegate, contract, r) =
                            (addr(v), addr(d), contract_addr(c), rights(r));
                        let all = registry.check_delegate_for_all(delegate, vault, r);
                        let by_contract =
                            registry.check_delegate_for_contract(delegate, vault, contract, r);
                        prop_assert!(!all || by_contract);

                        for t in 0u8..2 {
                            let id = U256::from(t);
                            let nft = registry.check_delegate_for_erc721(delegate, vault, contract, id, r);
                            prop_assert!(!by_contract || nft);
                            if by_contract {
                                prop_assert_eq!(
                                    registry.check_delegate_for_erc1155(delegate, vault, contract, id, r),
                                    U256::MAX
                                );
                            }
                        }
                        if by_contract {
                            prop_assert_eq!(
                                registry.check_delegate_for_erc20(delegate, vault, contract, r),
                                U256::MAX
                            );
                        }
                    }
                }
            }
        }
    }

    /// The all-check is the union of the wildcard and specific records.
    #[test]
    fn prop_all_check_is_wildcard_union(ops in prop::collection::vec(arb_op(), 0..60)) {
        let (registry, model) = run(&ops);

        for v in 1u8..=3 {
            for d in 1u8..=3 {
                let (vault, delegate) = (addr(v), addr(d));
                let wildcard = live_in_model(&model, &Scope::All, vault, delegate, Rights::WILDCARD);
                let specific = live_in_model(&model, &Scope::All, vault, delegate, rights(1));

                prop_assert_eq!(
                    registry.check_delegate_for_all(delegate, vault, Rights::WILDCARD),
                    wildcard
                );
                prop_assert_eq!(
                    registry.check_delegate_for_all(delegate, vault, rights(1)),
                    wildcard || specific
                );
            }
        }
    }

    /// Disabling then re-enabling a grant restores the cells of the first enable.
    #[test]
    fn prop_toggle_restores_record(
        setup in prop::collection::vec(arb_op(), 0..30),
        op in arb_op(),
    ) {
        let (mut registry, _) = run(&setup);
        let vault = addr(op.vault);
        let on = DelegationRequest { enable: true, ..request(&op) };
        let off = DelegationRequest { enable: false, ..request(&op) };

        let fp = registry.apply(vault, &on);
        let loc = registry.location_of(&fp);
        let first = registry.read_record(&loc);

        registry.apply(vault, &off);
        prop_assert!(!registry.is_enabled(&fp));
        registry.apply(vault, &on);
        prop_assert_eq!(registry.read_record(&loc), first);
    }

    /// Rolling back a failed unit of work restores every observable read.
    #[test]
    fn prop_transact_rollback(
        setup in prop::collection::vec(arb_op(), 0..30),
        doomed in prop::collection::vec(arb_op(), 1..30),
    ) {
        let (mut registry, _) = run(&setup);
        let before = registry.clone();

        let result: Result<(), ()> = registry.transact(|r| {
            for op in &doomed {
                r.apply(addr(op.vault), &request(op));
            }
            Err(())
        });
        prop_assert!(result.is_err());

        prop_assert_eq!(registry.store().records(), before.store().records());
        prop_assert_eq!(registry.events().len(), before.events().len());
        for v in 1u8..=3 {
            prop_assert_eq!(
                registry.outbox_len_for_vault(addr(v)),
                before.outbox_len_for_vault(addr(v))
            );
        }
    }
}
