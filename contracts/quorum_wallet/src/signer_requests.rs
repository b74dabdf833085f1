use soroban_sdk::{Address, Env};

use crate::errors::WalletError;
use crate::events;
use crate::proposal::{ExecutionEngine, Proposal};
use crate::signers::SignerRegistry;
use crate::storage::bump_persistent;
use crate::types::{DataKey, ProposalKind, SignerAction, SignerRequest, Transaction};

impl Proposal for SignerRequest {
    const KIND: ProposalKind = ProposalKind::SignerChange;

    fn counter_key() -> DataKey {
        DataKey::SignerRequestCount
    }

    fn not_found() -> WalletError {
        WalletError::SignerRequestNotFound
    }

    fn load(env: &Env, id: u64) -> Option<Self> {
        env.storage().persistent().get(&DataKey::SignerRequest(id))
    }

    fn save(&self, env: &Env, id: u64) {
        let key = DataKey::SignerRequest(id);
        env.storage().persistent().set(&key, self);
        bump_persistent(env, &key);
    }

    fn executed(&self) -> bool {
        self.executed
    }

    fn mark_executed(&mut self) {
        self.executed = true;
    }

    fn confirmations(&self) -> u32 {
        self.confirmations
    }

    fn set_confirmations(&mut self, confirmations: u32) {
        self.confirmations = confirmations;
    }

    // Guards are re-checked here: other requests may have changed the set
    // since this one was submitted.
    fn apply(&self, env: &Env, id: u64) -> Result<(), WalletError> {
        match self.action {
            SignerAction::Add => {
                SignerRegistry::add_signer(env, &self.signer)?;
                events::signer_added(env, &self.signer, id);
            }
            SignerAction::Remove => {
                SignerRegistry::remove_signer(env, &self.signer)?;
                events::signer_removed(env, &self.signer, id);
                // Votes already cast by the departing signer no longer count.
                ExecutionEngine::withdraw_votes::<Transaction>(env, &self.signer);
                ExecutionEngine::withdraw_votes::<SignerRequest>(env, &self.signer);
            }
        }
        Ok(())
    }
}

/// Proposals to add or remove a signer.
pub struct SignerRequestRegistry;

impl SignerRequestRegistry {
    pub fn submit(
        env: &Env,
        caller: &Address,
        signer: Address,
        action: SignerAction,
    ) -> Result<u64, WalletError> {
        SignerRegistry::require_signer(env, caller)?;

        if signer == env.current_contract_address() {
            return Err(WalletError::InvalidSigner);
        }

        match action {
            SignerAction::Add => {
                if SignerRegistry::is_signer(env, &signer) {
                    return Err(WalletError::AlreadySigner);
                }
            }
            SignerAction::Remove => {
                if !SignerRegistry::is_signer(env, &signer) {
                    return Err(WalletError::SignerNotFound);
                }
                // A removal that could never execute is not accepted.
                SignerRegistry::ensure_removable(env)?;
            }
        }

        let request = SignerRequest {
            signer,
            action,
            executed: false,
            confirmations: 1,
        };
        ExecutionEngine::submit(env, caller, request)
    }

    pub fn get(env: &Env, id: u64) -> Result<SignerRequest, WalletError> {
        ExecutionEngine::get::<SignerRequest>(env, id)
    }

    pub fn count(env: &Env) -> u64 {
        ExecutionEngine::count::<SignerRequest>(env)
    }
}
