//! Quorum-gated proposals.
//!
//! Transactions and signer requests share one lifecycle: submit with the
//! proposer's implicit vote, collect confirmations, execute once the
//! threshold is reached. `Proposal` captures what differs between the two
//! kinds (storage location and effect) and `ExecutionEngine` implements the
//! lifecycle once for both.

use soroban_sdk::{log, Address, Env, Vec};

use crate::confirmations::ConfirmationLedger;
use crate::errors::WalletError;
use crate::events;
use crate::signers::SignerRegistry;
use crate::storage::{next_index, read_counter};
use crate::types::{DataKey, ProposalKind};

pub trait Proposal: Sized {
    const KIND: ProposalKind;

    /// Instance key holding the number of proposals of this kind.
    fn counter_key() -> DataKey;

    fn not_found() -> WalletError;

    fn load(env: &Env, id: u64) -> Option<Self>;

    fn save(&self, env: &Env, id: u64);

    fn executed(&self) -> bool;

    fn mark_executed(&mut self);

    fn confirmations(&self) -> u32;

    fn set_confirmations(&mut self, confirmations: u32);

    /// Applies the proposal's effect. Runs after the proposal has been
    /// stored as executed.
    fn apply(&self, env: &Env, id: u64) -> Result<(), WalletError>;
}

pub struct ExecutionEngine;

impl ExecutionEngine {
    pub fn count<P: Proposal>(env: &Env) -> u64 {
        read_counter(env, &P::counter_key())
    }

    /// Ids of proposals of this kind that have not executed yet.
    pub fn pending<P: Proposal>(env: &Env) -> Vec<u64> {
        env.storage()
            .instance()
            .get(&DataKey::Pending(P::KIND))
            .unwrap_or(Vec::new(env))
    }

    fn set_pending<P: Proposal>(env: &Env, ids: &Vec<u64>) {
        env.storage().instance().set(&DataKey::Pending(P::KIND), ids);
    }

    fn persist<P: Proposal>(env: &Env, id: u64, proposal: &P) {
        proposal.save(env, id);
        ConfirmationLedger::extend_ttl(env, P::KIND, id);
    }

    /// Stores a freshly built proposal and records the proposer's vote.
    /// The caller must already be checked as a signer.
    pub fn submit<P: Proposal>(env: &Env, caller: &Address, mut proposal: P) -> Result<u64, WalletError> {
        let id = next_index(env, &P::counter_key());
        proposal.set_confirmations(1);
        proposal.save(env, id);
        ConfirmationLedger::record_confirmation(env, P::KIND, id, caller);

        let mut pending = Self::pending::<P>(env);
        pending.push_back(id);
        Self::set_pending::<P>(env, &pending);

        events::submitted(env, P::KIND, caller, id);
        Ok(id)
    }

    pub fn get<P: Proposal>(env: &Env, id: u64) -> Result<P, WalletError> {
        let count = Self::count::<P>(env);
        if id >= count {
            log!(env, "proposal not found", id, count);
            return Err(P::not_found());
        }
        P::load(env, id).ok_or_else(P::not_found)
    }

    fn get_pending<P: Proposal>(env: &Env, id: u64) -> Result<P, WalletError> {
        let proposal = Self::get::<P>(env, id)?;
        if proposal.executed() {
            log!(env, "proposal already executed", id);
            return Err(WalletError::AlreadyExecuted);
        }
        Ok(proposal)
    }

    /// Counts `caller`'s vote and executes the proposal when this vote
    /// reaches the threshold. Returns whether it executed.
    pub fn confirm<P: Proposal>(env: &Env, id: u64, caller: &Address) -> Result<bool, WalletError> {
        SignerRegistry::require_signer(env, caller)?;
        let mut proposal = Self::get_pending::<P>(env, id)?;

        if ConfirmationLedger::has_confirmed(env, P::KIND, id, caller) {
            log!(env, "already confirmed", id, caller.clone());
            return Err(WalletError::AlreadyConfirmed);
        }

        ConfirmationLedger::record_confirmation(env, P::KIND, id, caller);
        proposal.set_confirmations(proposal.confirmations() + 1);
        Self::persist(env, id, &proposal);
        events::confirmed(env, P::KIND, caller, id);

        if proposal.confirmations() < SignerRegistry::threshold(env) {
            return Ok(false);
        }

        Self::execute(env, id, caller, proposal)?;
        Ok(true)
    }

    pub fn revoke<P: Proposal>(env: &Env, id: u64, caller: &Address) -> Result<(), WalletError> {
        SignerRegistry::require_signer(env, caller)?;
        let mut proposal = Self::get_pending::<P>(env, id)?;

        if !ConfirmationLedger::has_confirmed(env, P::KIND, id, caller) {
            log!(env, "nothing to revoke", id, caller.clone());
            return Err(WalletError::NotConfirmed);
        }

        ConfirmationLedger::clear_confirmation(env, P::KIND, id, caller);
        proposal.set_confirmations(proposal.confirmations().saturating_sub(1));
        Self::persist(env, id, &proposal);

        events::revoked(env, P::KIND, caller, id);
        Ok(())
    }

    /// Drops `former`'s votes from every pending proposal of this kind.
    /// Runs when a signer leaves so that quorum only counts current signers.
    pub fn withdraw_votes<P: Proposal>(env: &Env, former: &Address) {
        for id in Self::pending::<P>(env).iter() {
            if !ConfirmationLedger::has_confirmed(env, P::KIND, id, former) {
                continue;
            }
            let Some(mut proposal) = P::load(env, id) else {
                continue;
            };

            ConfirmationLedger::clear_confirmation(env, P::KIND, id, former);
            proposal.set_confirmations(proposal.confirmations().saturating_sub(1));
            Self::persist(env, id, &proposal);

            events::revoked(env, P::KIND, former, id);
        }
    }

    fn execute<P: Proposal>(env: &Env, id: u64, caller: &Address, mut proposal: P) -> Result<(), WalletError> {
        // Flag before the effect: the effect may call out to another contract.
        proposal.mark_executed();
        Self::persist(env, id, &proposal);

        let mut pending = Self::pending::<P>(env);
        if let Some(position) = pending.first_index_of(id) {
            pending.remove(position);
        }
        Self::set_pending::<P>(env, &pending);

        proposal.apply(env, id)?;

        events::executed(env, P::KIND, caller, id);
        Ok(())
    }
}
