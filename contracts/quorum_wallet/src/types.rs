use soroban_sdk::{contracttype, Address, Bytes};

/// Smallest signer set the wallet will ever hold.
pub const MIN_SIGNERS: u32 = 2;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    // Instance storage: signer set and counters
    Signers,
    Signer(Address),
    Threshold,
    TxCount,
    SignerRequestCount,
    Pending(ProposalKind),
    // Persistent storage: proposal history and votes
    Tx(u64),
    SignerRequest(u64),
    Confirmations(ProposalKind, u64),
}

/// The two proposal families. Each has its own index space and its own
/// confirmation records.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalKind {
    Transaction,
    SignerChange,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignerAction {
    Add,
    Remove,
}

/// An outgoing transfer awaiting quorum.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub to: Address,
    pub token: Address,
    pub value: i128,
    pub data: Bytes,
    pub executed: bool,
    pub confirmations: u32,
}

/// A change to the signer set awaiting quorum.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerRequest {
    pub signer: Address,
    pub action: SignerAction,
    pub executed: bool,
    pub confirmations: u32,
}
