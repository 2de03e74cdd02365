use soroban_sdk::{contracttype, Address, Vec};

/// A withdrawal held by the wallet until enough owners approve it.
///
/// Indexes are assigned sequentially at creation and never reused; an
/// executed transaction is kept forever for audit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawTx {
    pub index: u64,

    pub to: Address,

    pub amount: i128,

    /// Owners that approved so far. Never contains duplicates.
    pub approvals: Vec<Address>,

    pub executed: bool,
}

/// Flat per-transaction view returned to clients.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawTxInfo {
    pub to: Address,

    pub amount: i128,

    pub approval_count: u32,

    pub executed: bool,
}
