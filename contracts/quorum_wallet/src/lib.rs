#![no_std]

mod confirmations;
mod errors;
mod events;
mod multisig;
mod proposal;
mod signer_requests;
mod signers;
mod storage;
mod transactions;
mod types;

pub use crate::errors::WalletError;
pub use crate::multisig::{QuorumWallet, QuorumWalletClient};
pub use crate::types::{ProposalKind, SignerAction, SignerRequest, Transaction, MIN_SIGNERS};
