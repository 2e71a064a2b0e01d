//! Rights checks — the cascade from broad grants to narrow ones.
//!
//! Each check consults the next-broader shape first and short-circuits on
//! success: an enabled `All` grant satisfies every contract and token
//! check for the same vault and delegate, and an enabled `Contract` grant
//! satisfies every token check under that contract.
//!
//! Within a shape, the wildcard record is always consulted. When the
//! caller supplies specific rights, the record under those rights is
//! consulted too and the results are unioned.
//!
//! Ceiling checks return `U256::MAX` when a broader grant applies and zero
//! when nothing does.
//!
//! `check_delegate_for_erc1155` does not union wildcard and specific
//! balances. It reads only the record under the exact rights supplied.
//! This differs from `check_delegate_for_erc20` and is kept as is until
//! the intended semantics are confirmed.

use alloy_primitives::{Address, U256};

use crate::grant::{Rights, Scope};
use crate::hash::Fingerprint;
use crate::record::{RecordCell, RecordStore};

use super::DelegateRegistry;

impl<S: RecordStore> DelegateRegistry<S> {
    /// Whether `delegate` may act for `vault` on anything under `rights`.
    pub fn check_delegate_for_all(&self, delegate: Address, vault: Address, rights: Rights) -> bool {
        let allowed = self.any_enabled(&Scope::All, vault, delegate, rights);
        log::trace!("check all {vault} -> {delegate} rights={rights}: {allowed}");
        allowed
    }

    /// Whether `delegate` may act for `vault` on everything under `contract`.
    pub fn check_delegate_for_contract(
        &self,
        delegate: Address,
        vault: Address,
        contract: Address,
        rights: Rights,
    ) -> bool {
        if self.check_delegate_for_all(delegate, vault, rights) {
            return true;
        }
        let allowed = self.any_enabled(&Scope::Contract { contract }, vault, delegate, rights);
        log::trace!("check contract {contract} {vault} -> {delegate} rights={rights}: {allowed}");
        allowed
    }

    /// Whether `delegate` may act for `vault` on token `token_id` of `contract`.
    pub fn check_delegate_for_erc721(
        &self,
        delegate: Address,
        vault: Address,
        contract: Address,
        token_id: U256,
        rights: Rights,
    ) -> bool {
        if self.check_delegate_for_contract(delegate, vault, contract, rights) {
            return true;
        }
        let scope = Scope::Erc721 { contract, token_id };
        let allowed = self.any_enabled(&scope, vault, delegate, rights);
        log::trace!(
            "check erc721 {contract}#{token_id} {vault} -> {delegate} rights={rights}: {allowed}"
        );
        allowed
    }

    /// Amount of `contract` that `delegate` may move for `vault`.
    ///
    /// `U256::MAX` if a contract-level or broader grant applies; otherwise
    /// the larger of the wildcard and specific-rights balances.
    pub fn check_delegate_for_erc20(
        &self,
        delegate: Address,
        vault: Address,
        contract: Address,
        rights: Rights,
    ) -> U256 {
        if self.check_delegate_for_contract(delegate, vault, contract, rights) {
            return U256::MAX;
        }
        let scope = Scope::Erc20 { contract };
        let mut amount = self.balance_of(&scope, vault, delegate, Rights::WILDCARD);
        if !rights.is_wildcard() {
            amount = amount.max(self.balance_of(&scope, vault, delegate, rights));
        }
        log::trace!("check erc20 {contract} {vault} -> {delegate} rights={rights}: {amount}");
        amount
    }

    /// Amount of token `token_id` of `contract` that `delegate` may move
    /// for `vault`.
    ///
    /// `U256::MAX` if a contract-level or broader grant applies; otherwise
    /// the balance of the grant under exactly `rights`.
    pub fn check_delegate_for_erc1155(
        &self,
        delegate: Address,
        vault: Address,
        contract: Address,
        token_id: U256,
        rights: Rights,
    ) -> U256 {
        if self.check_delegate_for_contract(delegate, vault, contract, rights) {
            return U256::MAX;
        }
        let scope = Scope::Erc1155 { contract, token_id };
        let amount = self.balance_of(&scope, vault, delegate, rights);
        log::trace!(
            "check erc1155 {contract}#{token_id} {vault} -> {delegate} rights={rights}: {amount}"
        );
        amount
    }

    // ── Lookups ──────────────────────────────────────────────────────────

    /// Wildcard record enabled, or the specific-rights record when given.
    fn any_enabled(&self, scope: &Scope, vault: Address, delegate: Address, rights: Rights) -> bool {
        self.is_enabled(&Fingerprint::compute(scope, vault, delegate, Rights::WILDCARD))
            || (!rights.is_wildcard()
                && self.is_enabled(&Fingerprint::compute(scope, vault, delegate, rights)))
    }

    /// Stored balance of one grant. Disabled grants read zero, including
    /// those whose vault cell never held a non-zero address.
    fn balance_of(&self, scope: &Scope, vault: Address, delegate: Address, rights: Rights) -> U256 {
        let location = self.location_of(&Fingerprint::compute(scope, vault, delegate, rights));
        let record = self.read_record(&location);
        if record.address(RecordCell::Vault).is_zero() {
            return U256::ZERO;
        }
        record.amount(RecordCell::Balance)
    }
}
