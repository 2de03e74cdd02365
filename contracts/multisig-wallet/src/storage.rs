use soroban_sdk::{symbol_short, Address, Env, Map, Symbol, Vec};

use crate::types::WithdrawTx;

const OWNERS: Symbol = symbol_short!("OWNERS");
const QUORUM: Symbol = symbol_short!("QUORUM");
const TOKEN: Symbol = symbol_short!("TOKEN");
const BALANCE: Symbol = symbol_short!("BALANCE");
const TXES: Symbol = symbol_short!("TXES");
const NEXT_INDEX: Symbol = symbol_short!("NEXTIDX");
const INITIALIZED: Symbol = symbol_short!("INIT");

// ============ OWNERS ============

pub fn read_owners(env: &Env) -> Vec<Address> {
    env.storage().instance().get(&OWNERS).unwrap()
}

pub fn write_owners(env: &Env, owners: &Vec<Address>) {
    env.storage().instance().set(&OWNERS, owners);
}

// ============ QUORUM ============

pub fn read_quorum(env: &Env) -> u32 {
    env.storage().instance().get(&QUORUM).unwrap()
}

pub fn write_quorum(env: &Env, quorum: u32) {
    env.storage().instance().set(&QUORUM, &quorum);
}

// ============ TOKEN ============

pub fn read_token(env: &Env) -> Address {
    env.storage().instance().get(&TOKEN).unwrap()
}

pub fn write_token(env: &Env, token: &Address) {
    env.storage().instance().set(&TOKEN, token);
}

// ============ TRACKED BALANCE ============

pub fn read_balance(env: &Env) -> i128 {
    env.storage().instance().get(&BALANCE).unwrap_or(0)
}

pub fn write_balance(env: &Env, amount: i128) {
    env.storage().instance().set(&BALANCE, &amount);
}

// ============ WITHDRAW TXES ============

pub fn read_txes(env: &Env) -> Map<u64, WithdrawTx> {
    env.storage().instance().get(&TXES)
        .unwrap_or(Map::new(env))
}

pub fn write_txes(env: &Env, txes: &Map<u64, WithdrawTx>) {
    env.storage().instance().set(&TXES, txes);
}

// ============ NEXT TX INDEX ============

pub fn read_next_index(env: &Env) -> u64 {
    env.storage().instance().get(&NEXT_INDEX).unwrap_or(0)
}

pub fn write_next_index(env: &Env, index: u64) {
    env.storage().instance().set(&NEXT_INDEX, &index);
}

// ============ INITIALIZED ============

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().get(&INITIALIZED).unwrap_or(false)
}

pub fn set_initialized(env: &Env, initialized: bool) {
    env.storage().instance().set(&INITIALIZED, &initialized);
}
