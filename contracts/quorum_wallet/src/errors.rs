use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    // Construction / signer-set validation
    TooFewSigners = 3,
    InvalidThreshold = 4,
    InvalidSigner = 5,
    DuplicateSigner = 6,
    AlreadySigner = 7,
    SignerNotFound = 8,
    MinimumSignersViolation = 9,
    // Authorization
    NotSigner = 10,
    // Lookup
    TxNotFound = 11,
    SignerRequestNotFound = 12,
    // Proposal state
    AlreadyExecuted = 13,
    AlreadyConfirmed = 14,
    NotConfirmed = 15,
    // Effects
    InvalidValue = 16,
    ExecutionFailed = 17,
}
