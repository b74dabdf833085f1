use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::{DataKey, MIN_SIGNERS};

/// Authoritative signer set and quorum threshold.
///
/// The ordered list lives under `DataKey::Signers` and each member also has
/// a `DataKey::Signer` entry used as the membership index. Both are written
/// together so they never disagree. Mutation happens only through executed
/// signer requests.
pub struct SignerRegistry;

impl SignerRegistry {
    /// Validates and stores the initial signer set.
    pub fn init(env: &Env, signers: &Vec<Address>, threshold: u32) -> Result<(), WalletError> {
        let count = signers.len();
        if count < MIN_SIGNERS {
            return Err(WalletError::TooFewSigners);
        }

        if threshold < MIN_SIGNERS || threshold > count {
            log!(env, "invalid threshold", threshold, count);
            return Err(WalletError::InvalidThreshold);
        }

        let wallet = env.current_contract_address();
        let storage = env.storage().instance();
        for signer in signers.iter() {
            if signer == wallet {
                return Err(WalletError::InvalidSigner);
            }
            // The index doubles as the duplicate check; a failed init is rolled back.
            if storage.has(&DataKey::Signer(signer.clone())) {
                log!(env, "duplicate signer", signer);
                return Err(WalletError::DuplicateSigner);
            }
            storage.set(&DataKey::Signer(signer), &true);
        }

        storage.set(&DataKey::Signers, signers);
        storage.set(&DataKey::Threshold, &threshold);
        Ok(())
    }

    pub fn is_signer(env: &Env, who: &Address) -> bool {
        env.storage()
            .instance()
            .has(&DataKey::Signer(who.clone()))
    }

    pub fn require_signer(env: &Env, who: &Address) -> Result<(), WalletError> {
        if !Self::is_signer(env, who) {
            log!(env, "caller is not a signer", who.clone());
            return Err(WalletError::NotSigner);
        }
        Ok(())
    }

    pub fn threshold(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Threshold)
            .unwrap_or(0)
    }

    pub fn signers(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Signers)
            .unwrap_or(Vec::new(env))
    }

    pub fn count(env: &Env) -> u32 {
        Self::signers(env).len()
    }

    /// Fails unless one signer can leave without the set dropping below
    /// `MIN_SIGNERS` or below the threshold.
    pub fn ensure_removable(env: &Env) -> Result<(), WalletError> {
        let remaining = Self::count(env).saturating_sub(1);
        let threshold = Self::threshold(env);
        if remaining < MIN_SIGNERS || remaining < threshold {
            log!(env, "removal would break quorum", remaining, threshold);
            return Err(WalletError::MinimumSignersViolation);
        }
        Ok(())
    }

    pub(crate) fn add_signer(env: &Env, signer: &Address) -> Result<(), WalletError> {
        if Self::is_signer(env, signer) {
            return Err(WalletError::AlreadySigner);
        }
        if *signer == env.current_contract_address() {
            return Err(WalletError::InvalidSigner);
        }

        let mut signers = Self::signers(env);
        signers.push_back(signer.clone());

        let storage = env.storage().instance();
        storage.set(&DataKey::Signers, &signers);
        storage.set(&DataKey::Signer(signer.clone()), &true);
        Ok(())
    }

    pub(crate) fn remove_signer(env: &Env, signer: &Address) -> Result<(), WalletError> {
        if !Self::is_signer(env, signer) {
            return Err(WalletError::SignerNotFound);
        }
        Self::ensure_removable(env)?;

        let mut signers = Self::signers(env);
        let position = signers
            .iter()
            .position(|s| s == *signer)
            .ok_or(WalletError::SignerNotFound)?;
        signers.remove(position as u32);

        let storage = env.storage().instance();
        storage.set(&DataKey::Signers, &signers);
        storage.remove(&DataKey::Signer(signer.clone()));
        Ok(())
    }
}
