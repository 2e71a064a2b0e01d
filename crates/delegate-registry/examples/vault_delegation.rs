//! Vault Delegation — issue scoped grants, check them, revoke, enumerate.
//!
//! Run with:
//!   cargo run --example vault_delegation -p delegate-registry

use alloy_primitives::{Address, U256};
use delegate_registry::{DelegateRegistry, Rights};

fn main() {
    let cold_wallet = Address::repeat_byte(0xc0);
    let hot_wallet = Address::repeat_byte(0x40);
    let voter = Address::repeat_byte(0x70);
    let nft = Address::repeat_byte(0xa1);
    let token = Address::repeat_byte(0xb2);

    let mut registry = DelegateRegistry::new();

    // ── 1. Cold wallet delegates everything to the hot wallet ───────────────
    let fp = registry.delegate_for_all(cold_wallet, hot_wallet, Rights::WILDCARD, true);
    println!("All-grant cold -> hot: {fp}");

    // ── 2. Voting rights on one NFT only ────────────────────────────────────
    let vote = Rights::from_label("vote").expect("short label");
    let fp = registry.delegate_for_erc721(cold_wallet, voter, nft, U256::from(7u64), vote, true);
    println!("ERC721 #7 vote-grant cold -> voter: {fp}");

    // ── 3. Checks cascade from broad to narrow ──────────────────────────────
    println!();
    println!(
        "hot may move token 123 of {nft}: {}",
        registry.check_delegate_for_erc721(hot_wallet, cold_wallet, nft, U256::from(123u64), vote)
    );
    println!(
        "voter may vote with #7:        {}",
        registry.check_delegate_for_erc721(voter, cold_wallet, nft, U256::from(7u64), vote)
    );
    println!(
        "voter may do anything with #7: {}",
        registry.check_delegate_for_erc721(voter, cold_wallet, nft, U256::from(7u64), Rights::WILDCARD)
    );
    println!(
        "hot allowance on {token}:  {}",
        registry.check_delegate_for_erc20(hot_wallet, cold_wallet, token, Rights::WILDCARD)
    );

    // ── 4. Revoke and enumerate ─────────────────────────────────────────────
    registry.delegate_for_all(cold_wallet, hot_wallet, Rights::WILDCARD, false);
    println!();
    println!("Live grants from the cold wallet after revoking the hot wallet:");
    for record in registry.delegations_for_vault(cold_wallet) {
        println!(
            "  {} -> {} ({}, rights={})",
            record.vault, record.delegate, record.shape, record.rights
        );
    }
    println!(
        "Outbox entries kept for the cold wallet: {}",
        registry.outbox_len_for_vault(cold_wallet)
    );

    println!();
    for event in registry.drain_events() {
        println!("event: {event}");
    }
}
