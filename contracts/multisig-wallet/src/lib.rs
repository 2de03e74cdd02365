#![cfg_attr(not(test), no_std)]

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

mod error;
mod events;
mod storage;
mod types;

use error::Error;
use events::{
    approved_event, created_event, deferred_event, deposit_event, executed_event, init_event,
};
use storage::{
    is_initialized, read_balance, read_next_index, read_owners, read_quorum, read_token,
    read_txes, set_initialized, write_balance, write_next_index, write_owners, write_quorum,
    write_token, write_txes,
};
use types::{WithdrawTx, WithdrawTxInfo};

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    /// Set up the wallet with its owner set, quorum and asset token.
    ///
    /// The owner set and quorum are fixed for the lifetime of the contract.
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        quorum: u32,
        token: Address,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        if owners.is_empty() {
            return Err(Error::InvalidOwnerSet);
        }
        for i in 0..owners.len() {
            let owner = owners.get_unchecked(i);
            for j in (i + 1)..owners.len() {
                if owner == owners.get_unchecked(j) {
                    return Err(Error::InvalidOwnerSet);
                }
            }
        }
        if quorum == 0 || quorum > owners.len() {
            return Err(Error::InvalidQuorum);
        }

        write_owners(&env, &owners);
        write_quorum(&env, quorum);
        write_token(&env, &token);
        write_balance(&env, 0);
        write_next_index(&env, 0);
        set_initialized(&env, true);

        init_event(&env, owners.len(), quorum);
        log!(&env, "MultisigWallet: initialized, {} owners, quorum {}", owners.len(), quorum);
        Ok(())
    }

    /// Deposit tokens into the wallet. Open to anyone, no approval needed.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        if !is_initialized(&env) {
            return Err(Error::NotInitialized);
        }
        from.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let token_client = token::Client::new(&env, &read_token(&env));
        token_client.transfer(&from, &env.current_contract_address(), &amount);

        let balance = read_balance(&env) + amount;
        write_balance(&env, balance);

        deposit_event(&env, from, amount, balance);
        log!(&env, "Deposit: amount={}, balance={}", amount, balance);
        Ok(())
    }

    /// Create a withdraw transaction. Moves no funds until quorum approves it.
    pub fn create_withdraw_tx(
        env: Env,
        owner: Address,
        to: Address,
        amount: i128,
    ) -> Result<u64, Error> {
        if !is_initialized(&env) {
            return Err(Error::NotInitialized);
        }
        owner.require_auth();
        Self::require_owner(&env, &owner)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let index = read_next_index(&env);
        let tx = WithdrawTx {
            index,
            to: to.clone(),
            amount,
            approvals: Vec::new(&env),
            executed: false,
        };

        let mut txes = read_txes(&env);
        txes.set(index, tx);
        write_txes(&env, &txes);
        write_next_index(&env, index + 1);

        created_event(&env, owner, index, to, amount);
        log!(&env, "Withdraw tx {} created: amount={}", index, amount);
        Ok(index)
    }

    /// Approve a pending withdraw transaction.
    ///
    /// Once the approval count reaches quorum the transaction executes in the
    /// same invocation, provided the balance covers it. With the balance
    /// short, the approval is still recorded and the transaction stays
    /// pending; a later approval or `execute_withdraw_tx` completes it.
    pub fn approve_withdraw_tx(env: Env, owner: Address, index: u64) -> Result<(), Error> {
        if !is_initialized(&env) {
            return Err(Error::NotInitialized);
        }
        owner.require_auth();
        Self::require_owner(&env, &owner)?;

        let mut txes = read_txes(&env);
        let mut tx = txes.get(index).ok_or(Error::TxNotFound)?;

        if tx.executed {
            return Err(Error::AlreadyExecuted);
        }
        if tx.approvals.contains(&owner) {
            return Err(Error::AlreadyApproved);
        }

        tx.approvals.push_back(owner.clone());
        approved_event(&env, owner, index, tx.approvals.len());
        log!(&env, "Withdraw tx {} approved, {} approvals", index, tx.approvals.len());

        if tx.approvals.len() >= read_quorum(&env) {
            let balance = read_balance(&env);
            if balance >= tx.amount {
                Self::execute_tx(&env, &mut tx, balance);
            } else {
                deferred_event(&env, index, tx.amount, balance);
                log!(&env, "Withdraw tx {} deferred: balance={}", index, balance);
            }
        }

        txes.set(index, tx);
        write_txes(&env, &txes);
        Ok(())
    }

    /// Retry execution of a quorum-met transaction that was short of funds.
    pub fn execute_withdraw_tx(env: Env, owner: Address, index: u64) -> Result<(), Error> {
        if !is_initialized(&env) {
            return Err(Error::NotInitialized);
        }
        owner.require_auth();
        Self::require_owner(&env, &owner)?;

        let mut txes = read_txes(&env);
        let mut tx = txes.get(index).ok_or(Error::TxNotFound)?;

        if tx.executed {
            return Err(Error::AlreadyExecuted);
        }
        if tx.approvals.len() < read_quorum(&env) {
            return Err(Error::QuorumNotReached);
        }

        let balance = read_balance(&env);
        if balance < tx.amount {
            return Err(Error::InsufficientBalance);
        }

        Self::execute_tx(&env, &mut tx, balance);
        txes.set(index, tx);
        write_txes(&env, &txes);
        Ok(())
    }

    pub fn get_owners(env: Env) -> Vec<Address> {
        read_owners(&env)
    }

    pub fn is_owner(env: Env, addr: Address) -> bool {
        read_owners(&env).contains(&addr)
    }

    pub fn balance_of(env: Env) -> i128 {
        read_balance(&env)
    }

    pub fn get_quorum(env: Env) -> u32 {
        read_quorum(&env)
    }

    pub fn get_withdraw_tx_count(env: Env) -> u64 {
        read_next_index(&env)
    }

    pub fn get_withdraw_tx(env: Env, index: u64) -> Option<WithdrawTx> {
        read_txes(&env).get(index)
    }

    /// All withdraw transactions in creation order; position matches index.
    pub fn get_withdraw_txes(env: Env) -> Vec<WithdrawTxInfo> {
        let txes = read_txes(&env);
        let mut result = Vec::new(&env);

        for (_, tx) in txes.iter() {
            result.push_back(WithdrawTxInfo {
                to: tx.to.clone(),
                amount: tx.amount,
                approval_count: tx.approvals.len(),
                executed: tx.executed,
            });
        }

        result
    }

    pub fn get_pending_txes(env: Env) -> Vec<WithdrawTx> {
        let txes = read_txes(&env);
        let mut pending = Vec::new(&env);

        for (_, tx) in txes.iter() {
            if !tx.executed {
                pending.push_back(tx);
            }
        }

        pending
    }

    fn require_owner(env: &Env, addr: &Address) -> Result<(), Error> {
        if read_owners(env).contains(addr) {
            Ok(())
        } else {
            Err(Error::Unauthorized)
        }
    }

    /// Move the funds and mark the transaction done. Callers persist `tx`.
    fn execute_tx(env: &Env, tx: &mut WithdrawTx, balance: i128) {
        let token_client = token::Client::new(env, &read_token(env));
        token_client.transfer(&env.current_contract_address(), &tx.to, &tx.amount);

        write_balance(env, balance - tx.amount);
        tx.executed = true;

        executed_event(env, tx.index, tx.to.clone(), tx.amount);
        log!(env, "Withdraw tx {} executed: amount={}", tx.index, tx.amount);
    }
}
