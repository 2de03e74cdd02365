use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,

    NotInitialized = 2,

    Unauthorized = 3,

    InvalidAmount = 4,

    TxNotFound = 5,

    AlreadyApproved = 6,

    AlreadyExecuted = 7,

    InsufficientBalance = 8,

    InvalidOwnerSet = 9,

    InvalidQuorum = 10,

    QuorumNotReached = 11,
}
