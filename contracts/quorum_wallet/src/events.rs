//! Audit trail. Every state transition is published as a contract event
//! whose topics name the action and the acting principal, and whose data
//! carries the affected id.

use soroban_sdk::{contractevent, Address, Env, Vec};

use crate::types::ProposalKind;

#[contractevent(topics = ["init"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletInitialized {
    pub signers: Vec<Address>,
    pub threshold: u32,
}

#[contractevent(topics = ["submit"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionSubmitted {
    #[topic]
    pub caller: Address,
    pub id: u64,
}

#[contractevent(topics = ["confirm"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionConfirmed {
    #[topic]
    pub caller: Address,
    pub id: u64,
}

#[contractevent(topics = ["revoke"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionRevoked {
    #[topic]
    pub caller: Address,
    pub id: u64,
}

/// `caller` is the signer whose confirmation reached quorum.
#[contractevent(topics = ["execute"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionExecuted {
    #[topic]
    pub caller: Address,
    pub id: u64,
}

#[contractevent(topics = ["req_sub"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerRequestSubmitted {
    #[topic]
    pub caller: Address,
    pub id: u64,
}

#[contractevent(topics = ["req_conf"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerRequestConfirmed {
    #[topic]
    pub caller: Address,
    pub id: u64,
}

#[contractevent(topics = ["req_rev"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerRequestRevoked {
    #[topic]
    pub caller: Address,
    pub id: u64,
}

#[contractevent(topics = ["req_exec"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerRequestExecuted {
    #[topic]
    pub caller: Address,
    pub id: u64,
}

#[contractevent(topics = ["added"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerAdded {
    #[topic]
    pub signer: Address,
    pub request_id: u64,
}

#[contractevent(topics = ["removed"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerRemoved {
    #[topic]
    pub signer: Address,
    pub request_id: u64,
}

#[contractevent(topics = ["deposit"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    #[topic]
    pub from: Address,
    #[topic]
    pub token: Address,
    pub amount: i128,
}

pub fn initialized(env: &Env, signers: &Vec<Address>, threshold: u32) {
    WalletInitialized {
        signers: signers.clone(),
        threshold,
    }
    .publish(env);
}

pub fn submitted(env: &Env, kind: ProposalKind, caller: &Address, id: u64) {
    let caller = caller.clone();
    match kind {
        ProposalKind::Transaction => TransactionSubmitted { caller, id }.publish(env),
        ProposalKind::SignerChange => SignerRequestSubmitted { caller, id }.publish(env),
    }
}

pub fn confirmed(env: &Env, kind: ProposalKind, caller: &Address, id: u64) {
    let caller = caller.clone();
    match kind {
        ProposalKind::Transaction => TransactionConfirmed { caller, id }.publish(env),
        ProposalKind::SignerChange => SignerRequestConfirmed { caller, id }.publish(env),
    }
}

/// Also published when a departing signer's vote is withdrawn.
pub fn revoked(env: &Env, kind: ProposalKind, caller: &Address, id: u64) {
    let caller = caller.clone();
    match kind {
        ProposalKind::Transaction => TransactionRevoked { caller, id }.publish(env),
        ProposalKind::SignerChange => SignerRequestRevoked { caller, id }.publish(env),
    }
}

pub fn executed(env: &Env, kind: ProposalKind, caller: &Address, id: u64) {
    let caller = caller.clone();
    match kind {
        ProposalKind::Transaction => TransactionExecuted { caller, id }.publish(env),
        ProposalKind::SignerChange => SignerRequestExecuted { caller, id }.publish(env),
    }
}

pub fn signer_added(env: &Env, signer: &Address, request_id: u64) {
    SignerAdded {
        signer: signer.clone(),
        request_id,
    }
    .publish(env);
}

pub fn signer_removed(env: &Env, signer: &Address, request_id: u64) {
    SignerRemoved {
        signer: signer.clone(),
        request_id,
    }
    .publish(env);
}

pub fn deposited(env: &Env, from: &Address, token: &Address, amount: i128) {
    Deposited {
        from: from.clone(),
        token: token.clone(),
        amount,
    }
    .publish(env);
}
