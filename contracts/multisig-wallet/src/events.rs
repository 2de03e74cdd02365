use soroban_sdk::{symbol_short, Address, Env};

// Event emitted once when the wallet is set up
pub fn init_event(env: &Env, owner_count: u32, quorum: u32) {
    let topics = (symbol_short!("init"),);
    env.events().publish(topics, (owner_count, quorum));
}

// Event emitted when anyone deposits into the wallet
pub fn deposit_event(env: &Env, from: Address, amount: i128, balance: i128) {
    let topics = (symbol_short!("deposit"), from);
    env.events().publish(topics, (amount, balance));
}

// Event emitted when an owner creates a withdraw transaction
pub fn created_event(env: &Env, owner: Address, index: u64, to: Address, amount: i128) {
    let topics = (symbol_short!("created"), owner);
    env.events().publish(topics, (index, to, amount));
}

// Event emitted when an owner approves a withdraw transaction
pub fn approved_event(env: &Env, owner: Address, index: u64, approval_count: u32) {
    let topics = (symbol_short!("approved"), owner);
    env.events().publish(topics, (index, approval_count));
}

// Event emitted when a withdraw transaction executes and funds move
pub fn executed_event(env: &Env, index: u64, to: Address, amount: i128) {
    let topics = (symbol_short!("executed"),);
    env.events().publish(topics, (index, to, amount));
}

// Event emitted when quorum is reached but the balance cannot cover the amount
pub fn deferred_event(env: &Env, index: u64, amount: i128, balance: i128) {
    let topics = (symbol_short!("deferred"),);
    env.events().publish(topics, (index, amount, balance));
}
