//! Write path — enabling and disabling grants.
//!
//! All five shape-specific entry points and the batch entry point funnel
//! into [`DelegateRegistry::apply`], which is the only code that touches
//! record cells on write.
//!
//! Writes never fail. Disabling a grant that was never enabled zeroes
//! already-zero cells and still emits an event.

use alloy_primitives::{Address, B256, U256};

use crate::grant::{DelegationRequest, Rights};
use crate::hash::Fingerprint;
use crate::record::cell::{address_to_word, amount_to_word};
use crate::record::{RecordCell, RecordStore};

use super::{DelegateRegistry, DelegationEvent};

impl<S: RecordStore> DelegateRegistry<S> {
    // ── Shape-specific entry points ──────────────────────────────────────

    /// Enable or disable an unconditional grant from `vault` to `delegate`.
    pub fn delegate_for_all(
        &mut self,
        vault: Address,
        delegate: Address,
        rights: Rights,
        enable: bool,
    ) -> Fingerprint {
        self.apply(vault, &DelegationRequest::all(delegate, rights, enable))
    }

    /// Enable or disable a grant over everything held under `contract`.
    pub fn delegate_for_contract(
        &mut self,
        vault: Address,
        delegate: Address,
        contract: Address,
        rights: Rights,
        enable: bool,
    ) -> Fingerprint {
        self.apply(
            vault,
            &DelegationRequest::contract(delegate, contract, rights, enable),
        )
    }

    /// Enable or disable a grant over one non-fungible token.
    pub fn delegate_for_erc721(
        &mut self,
        vault: Address,
        delegate: Address,
        contract: Address,
        token_id: U256,
        rights: Rights,
        enable: bool,
    ) -> Fingerprint {
        self.apply(
            vault,
            &DelegationRequest::erc721(delegate, contract, token_id, rights, enable),
        )
    }

    /// Enable or disable a fungible allowance of up to `amount`.
    ///
    /// Re-enabling an existing grant overwrites its balance.
    pub fn delegate_for_erc20(
        &mut self,
        vault: Address,
        delegate: Address,
        contract: Address,
        amount: U256,
        rights: Rights,
        enable: bool,
    ) -> Fingerprint {
        self.apply(
            vault,
            &DelegationRequest::erc20(delegate, contract, amount, rights, enable),
        )
    }

    /// Enable or disable an allowance of up to `amount` of one token id.
    #[allow(clippy::too_many_arguments)]
    pub fn delegate_for_erc1155(
        &mut self,
        vault: Address,
        delegate: Address,
        contract: Address,
        token_id: U256,
        amount: U256,
        rights: Rights,
        enable: bool,
    ) -> Fingerprint {
        self.apply(
            vault,
            &DelegationRequest::erc1155(delegate, contract, token_id, amount, rights, enable),
        )
    }

    // ── Batch ────────────────────────────────────────────────────────────

    /// Apply `requests` in order, each exactly as its single entry point
    /// would, all on behalf of `vault`.
    ///
    /// Returns the fingerprint touched by each request, in order. An empty
    /// batch is a no-op.
    pub fn batch_delegate(
        &mut self,
        vault: Address,
        requests: &[DelegationRequest],
    ) -> Vec<Fingerprint> {
        log::debug!("batch of {} delegation requests from {vault}", requests.len());
        requests
            .iter()
            .map(|request| self.apply(vault, request))
            .collect()
    }

    // ── Core write ───────────────────────────────────────────────────────

    /// Enable or disable the grant described by `request`, issued by `vault`.
    ///
    /// Enabling writes the delegate and vault cells, the rights cell when
    /// the rights are specific, and the shape's asset cells; then appends
    /// the fingerprint to both outbox logs. Disabling zeroes the same
    /// cells and leaves the logs alone.
    pub fn apply(&mut self, vault: Address, request: &DelegationRequest) -> Fingerprint {
        let fingerprint =
            Fingerprint::compute(&request.scope, vault, request.delegate, request.rights);
        let location = self.location_of(&fingerprint);
        let shape = request.shape();

        if request.enable {
            let store = self.store_mut();
            store.store(&location, RecordCell::Delegate, address_to_word(request.delegate));
            store.store(&location, RecordCell::Vault, address_to_word(vault));
            if !request.rights.is_wildcard() {
                store.store(&location, RecordCell::Rights, request.rights.as_word());
            }
            for &cell in shape.asset_cells() {
                store.store(&location, cell, asset_word(request, cell));
            }
            self.outbox_mut()
                .append(vault, request.delegate, fingerprint);
        } else {
            let store = self.store_mut();
            store.store(&location, RecordCell::Delegate, B256::ZERO);
            store.store(&location, RecordCell::Vault, B256::ZERO);
            if !request.rights.is_wildcard() {
                store.store(&location, RecordCell::Rights, B256::ZERO);
            }
            for &cell in shape.asset_cells() {
                store.store(&location, cell, B256::ZERO);
            }
        }

        log::debug!(
            "{} {shape} grant {fingerprint}: {vault} -> {}",
            if request.enable { "enabled" } else { "disabled" },
            request.delegate
        );

        self.journal(DelegationEvent::from_request(vault, request, fingerprint));
        fingerprint
    }
}

/// Value an enabling write stores into one of the shape's asset cells.
fn asset_word(request: &DelegationRequest, cell: RecordCell) -> B256 {
    match cell {
        RecordCell::Contract => address_to_word(request.scope.contract().unwrap_or_default()),
        RecordCell::TokenId => amount_to_word(request.scope.token_id().unwrap_or_default()),
        RecordCell::Balance => amount_to_word(request.effective_balance().unwrap_or_default()),
        RecordCell::Delegate | RecordCell::Vault | RecordCell::Rights => B256::ZERO,
    }
}
