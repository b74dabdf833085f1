use soroban_sdk::{contract, contractimpl, token, Address, Bytes, Env, Vec};

use crate::confirmations::ConfirmationLedger;
use crate::errors::WalletError;
use crate::events;
use crate::proposal::ExecutionEngine;
use crate::signer_requests::SignerRequestRegistry;
use crate::signers::SignerRegistry;
use crate::storage::{bump_instance, require_initialized};
use crate::transactions::TransactionRegistry;
use crate::types::{DataKey, ProposalKind, SignerAction, SignerRequest, Transaction};

#[contract]
pub struct QuorumWallet;

#[contractimpl]
impl QuorumWallet {
    /// Sets the initial signer set and quorum threshold. Callable once.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the wallet already has signers
    /// * `TooFewSigners` - Fewer than two signers
    /// * `InvalidThreshold` - Threshold outside `[2, signers.len()]`
    /// * `InvalidSigner` - The wallet itself is listed as a signer
    /// * `DuplicateSigner` - A signer is listed twice
    pub fn initialize(env: Env, signers: Vec<Address>, threshold: u32) -> Result<(), WalletError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(WalletError::AlreadyInitialized);
        }

        SignerRegistry::init(&env, &signers, threshold)?;
        env.storage().instance().set(&DataKey::Initialized, &true);
        bump_instance(&env);

        events::initialized(&env, &signers, threshold);
        Ok(())
    }

    /// Accepts `amount` of `token` from `from`. Anyone may deposit.
    pub fn deposit(env: Env, from: Address, token: Address, amount: i128) -> Result<(), WalletError> {
        require_initialized(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(WalletError::InvalidValue);
        }

        token::Client::new(&env, &token).transfer(&from, &env.current_contract_address(), &amount);
        events::deposited(&env, &from, &token, amount);
        Ok(())
    }

    // ---- transactions ----

    /// Proposes sending `value` of `token` to `to`, with `data` kept on
    /// record. The proposer's confirmation is counted immediately.
    ///
    /// # Errors
    /// * `NotSigner` - `caller` is not a signer
    /// * `InvalidValue` - `value` is negative
    pub fn submit_transaction(
        env: Env,
        caller: Address,
        to: Address,
        token: Address,
        value: i128,
        data: Bytes,
    ) -> Result<u64, WalletError> {
        require_initialized(&env)?;
        caller.require_auth();
        TransactionRegistry::submit(&env, &caller, to, token, value, data)
    }

    /// Confirms transaction `id`. Executes it when this confirmation reaches
    /// the threshold and returns whether it did.
    ///
    /// # Errors
    /// * `NotSigner` - `caller` is not a signer
    /// * `TxNotFound` - No transaction with this id
    /// * `AlreadyExecuted` - The transaction has already executed
    /// * `AlreadyConfirmed` - `caller` already confirmed it
    /// * `ExecutionFailed` - The transfer failed; nothing from this call persists
    pub fn confirm_transaction(env: Env, id: u64, caller: Address) -> Result<bool, WalletError> {
        require_initialized(&env)?;
        caller.require_auth();
        ExecutionEngine::confirm::<Transaction>(&env, id, &caller)
    }

    /// Withdraws `caller`'s confirmation of a pending transaction.
    ///
    /// # Errors
    /// * `NotSigner`, `TxNotFound`, `AlreadyExecuted`
    /// * `NotConfirmed` - `caller` has no confirmation to withdraw
    pub fn revoke_confirmation(env: Env, id: u64, caller: Address) -> Result<(), WalletError> {
        require_initialized(&env)?;
        caller.require_auth();
        ExecutionEngine::revoke::<Transaction>(&env, id, &caller)
    }

    pub fn transaction(env: Env, id: u64) -> Result<Transaction, WalletError> {
        require_initialized(&env)?;
        TransactionRegistry::get(&env, id)
    }

    pub fn transaction_count(env: Env) -> Result<u64, WalletError> {
        require_initialized(&env)?;
        Ok(TransactionRegistry::count(&env))
    }

    pub fn transaction_confirmations(env: Env, id: u64) -> Result<Vec<Address>, WalletError> {
        require_initialized(&env)?;
        TransactionRegistry::get(&env, id)?;
        Ok(ConfirmationLedger::confirmers(&env, ProposalKind::Transaction, id))
    }

    pub fn is_transaction_confirmed(env: Env, id: u64, signer: Address) -> Result<bool, WalletError> {
        require_initialized(&env)?;
        TransactionRegistry::get(&env, id)?;
        Ok(ConfirmationLedger::has_confirmed(&env, ProposalKind::Transaction, id, &signer))
    }

    // ---- signer requests ----

    /// Proposes adding or removing `signer`. The proposer's confirmation is
    /// counted immediately.
    ///
    /// # Errors
    /// * `NotSigner` - `caller` is not a signer
    /// * `InvalidSigner` - `signer` is the wallet itself
    /// * `AlreadySigner` - Adding a current signer
    /// * `SignerNotFound` - Removing a non-signer
    /// * `MinimumSignersViolation` - Removal would drop below two signers or the threshold
    pub fn submit_signer_request(
        env: Env,
        caller: Address,
        signer: Address,
        action: SignerAction,
    ) -> Result<u64, WalletError> {
        require_initialized(&env)?;
        caller.require_auth();
        SignerRequestRegistry::submit(&env, &caller, signer, action)
    }

    /// Confirms signer request `id`, applying the change at the threshold.
    pub fn confirm_signer_request(env: Env, id: u64, caller: Address) -> Result<bool, WalletError> {
        require_initialized(&env)?;
        caller.require_auth();
        ExecutionEngine::confirm::<SignerRequest>(&env, id, &caller)
    }

    pub fn revoke_signer_request(env: Env, id: u64, caller: Address) -> Result<(), WalletError> {
        require_initialized(&env)?;
        caller.require_auth();
        ExecutionEngine::revoke::<SignerRequest>(&env, id, &caller)
    }

    pub fn signer_request(env: Env, id: u64) -> Result<SignerRequest, WalletError> {
        require_initialized(&env)?;
        SignerRequestRegistry::get(&env, id)
    }

    pub fn signer_request_count(env: Env) -> Result<u64, WalletError> {
        require_initialized(&env)?;
        Ok(SignerRequestRegistry::count(&env))
    }

    pub fn signer_request_confirmations(env: Env, id: u64) -> Result<Vec<Address>, WalletError> {
        require_initialized(&env)?;
        SignerRequestRegistry::get(&env, id)?;
        Ok(ConfirmationLedger::confirmers(&env, ProposalKind::SignerChange, id))
    }

    pub fn is_signer_request_confirmed(env: Env, id: u64, signer: Address) -> Result<bool, WalletError> {
        require_initialized(&env)?;
        SignerRequestRegistry::get(&env, id)?;
        Ok(ConfirmationLedger::has_confirmed(&env, ProposalKind::SignerChange, id, &signer))
    }

    // ---- signer set ----

    pub fn signers(env: Env) -> Result<Vec<Address>, WalletError> {
        require_initialized(&env)?;
        Ok(SignerRegistry::signers(&env))
    }

    pub fn signer_count(env: Env) -> Result<u32, WalletError> {
        require_initialized(&env)?;
        Ok(SignerRegistry::count(&env))
    }

    pub fn is_signer(env: Env, signer: Address) -> Result<bool, WalletError> {
        require_initialized(&env)?;
        Ok(SignerRegistry::is_signer(&env, &signer))
    }

    pub fn threshold(env: Env) -> Result<u32, WalletError> {
        require_initialized(&env)?;
        Ok(SignerRegistry::threshold(&env))
    }
}
