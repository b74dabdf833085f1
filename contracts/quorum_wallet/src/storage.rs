use soroban_sdk::Env;

use crate::errors::WalletError;
use crate::types::{
    DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

pub fn require_initialized(env: &Env) -> Result<(), WalletError> {
    if !env.storage().instance().has(&DataKey::Initialized) {
        return Err(WalletError::NotInitialized);
    }
    bump_instance(env);
    Ok(())
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Reads a monotonically increasing index counter. Missing means zero.
pub fn read_counter(env: &Env, key: &DataKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0u64)
}

/// Reserves the next index under `key` and returns it.
pub fn next_index(env: &Env, key: &DataKey) -> u64 {
    let id = read_counter(env, key);
    env.storage().instance().set(key, &(id + 1));
    id
}
