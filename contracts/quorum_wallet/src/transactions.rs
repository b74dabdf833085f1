use soroban_sdk::{log, token, Address, Bytes, Env};

use crate::errors::WalletError;
use crate::proposal::{ExecutionEngine, Proposal};
use crate::signers::SignerRegistry;
use crate::storage::bump_persistent;
use crate::types::{DataKey, ProposalKind, Transaction};

impl Proposal for Transaction {
    const KIND: ProposalKind = ProposalKind::Transaction;

    fn counter_key() -> DataKey {
        DataKey::TxCount
    }

    fn not_found() -> WalletError {
        WalletError::TxNotFound
    }

    fn load(env: &Env, id: u64) -> Option<Self> {
        env.storage().persistent().get(&DataKey::Tx(id))
    }

    fn save(&self, env: &Env, id: u64) {
        let key = DataKey::Tx(id);
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

    /// Moves `value` of `token` from the wallet to `to`. The payload is not
    /// interpreted here; it stays on record with the proposal.
    fn apply(&self, env: &Env, id: u64) -> Result<(), WalletError> {
        if self.value == 0 {
            return Ok(());
        }

        let client = token::Client::new(env, &self.token);
        match client.try_transfer(&env.current_contract_address(), &self.to, &self.value) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(env, "transfer failed", id, self.value);
                Err(WalletError::ExecutionFailed)
            }
        }
    }
}

/// Outgoing transfer proposals.
pub struct TransactionRegistry;

impl TransactionRegistry {
    pub fn submit(
        env: &Env,
        caller: &Address,
        to: Address,
        token: Address,
        value: i128,
        data: Bytes,
    ) -> Result<u64, WalletError> {
        SignerRegistry::require_signer(env, caller)?;

        if value < 0 {
            return Err(WalletError::InvalidValue);
        }

        let tx = Transaction {
            to,
            token,
            value,
            data,
            executed: false,
            confirmations: 1,
        };
        ExecutionEngine::submit(env, caller, tx)
    }

    pub fn get(env: &Env, id: u64) -> Result<Transaction, WalletError> {
        ExecutionEngine::get::<Transaction>(env, id)
    }

    pub fn count(env: &Env) -> u64 {
        ExecutionEngine::count::<Transaction>(env)
    }
}
