use soroban_sdk::{Address, Env, Vec};

use crate::storage::bump_persistent;
use crate::types::{DataKey, ProposalKind};

/// Records which principal confirmed which proposal.
///
/// Each proposal keeps one voter list; a principal's bit for the proposal is
/// its membership in that list. The ledger only edits the list. Callers check
/// `has_confirmed` first and decide what a repeated vote means.
pub struct ConfirmationLedger;

impl ConfirmationLedger {
    fn key(kind: ProposalKind, id: u64) -> DataKey {
        DataKey::Confirmations(kind, id)
    }

    fn store(env: &Env, kind: ProposalKind, id: u64, voters: &Vec<Address>) {
        let key = Self::key(kind, id);
        env.storage().persistent().set(&key, voters);
        bump_persistent(env, &key);
    }

    /// Principals whose vote currently counts, in voting order.
    pub fn confirmers(env: &Env, kind: ProposalKind, id: u64) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&Self::key(kind, id))
            .unwrap_or(Vec::new(env))
    }

    pub fn has_confirmed(env: &Env, kind: ProposalKind, id: u64, who: &Address) -> bool {
        Self::confirmers(env, kind, id).contains(who)
    }

    pub fn record_confirmation(env: &Env, kind: ProposalKind, id: u64, who: &Address) {
        let mut voters = Self::confirmers(env, kind, id);
        voters.push_back(who.clone());
        Self::store(env, kind, id, &voters);
    }

    pub fn clear_confirmation(env: &Env, kind: ProposalKind, id: u64, who: &Address) {
        let mut voters = Self::confirmers(env, kind, id);
        if let Some(position) = voters.first_index_of(who) {
            voters.remove(position);
        }
        Self::store(env, kind, id, &voters);
    }

    /// Keeps the voter list alive as long as its proposal.
    pub fn extend_ttl(env: &Env, kind: ProposalKind, id: u64) {
        let key = Self::key(kind, id);
        if env.storage().persistent().has(&key) {
            bump_persistent(env, &key);
        }
    }
}
