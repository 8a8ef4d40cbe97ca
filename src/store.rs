// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use crate::db::PersistenceAdapter;
use crate::models::{
    Account, AccountType, DEFAULT_COLOR, Ledger, SessionEntry, Transaction, TransferEntry,
    generate_id,
};

/// Deltas smaller than this are treated as "no change" so rounding noise in
/// end-balance input never produces a transaction.
pub const SETTLE_EPSILON: f64 = 0.01;

/// One (account, end-of-session balance) pair from a settlement batch.
#[derive(Debug, Clone)]
pub struct SessionUpdate {
    pub account_id: String,
    pub end_balance: f64,
}

/// Partial account edit. `None` fields are left untouched. A direct
/// `balance` edit deliberately bypasses the transaction log (correction
/// escape hatch).
#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub r#type: Option<AccountType>,
    pub icon: Option<String>,
    pub balance: Option<f64>,
    pub color: Option<String>,
}

/// Owns the authoritative ledger state and executes all mutations.
/// Validation failures are silent no-ops; the only error a mutation can
/// return comes from the persistence save. Every successful mutation saves
/// the whole state.
pub struct LedgerStore<P: PersistenceAdapter> {
    state: Ledger,
    adapter: P,
}

impl<P: PersistenceAdapter> LedgerStore<P> {
    pub fn open(adapter: P) -> Self {
        let state = adapter.load();
        LedgerStore { state, adapter }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.state.accounts
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn state(&self) -> &Ledger {
        &self.state
    }

    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    /// Settle a batch of end-of-session balances produced by one user
    /// action. Unknown account ids are skipped; deltas under
    /// [`SETTLE_EPSILON`] are skipped. Each qualifying pair yields one
    /// SESSION entry whose timestamp is a shared base plus the pair's batch
    /// position, so relative order survives same-millisecond batches. New
    /// entries are prepended in batch order. Returns how many sessions were
    /// recorded; zero means the state was left untouched.
    pub fn settle_sessions(&mut self, updates: &[SessionUpdate]) -> Result<usize> {
        let base = Utc::now().timestamp_millis();
        let mut recorded: Vec<Transaction> = Vec::new();

        for (index, update) in updates.iter().enumerate() {
            let Some(account) = self
                .state
                .accounts
                .iter_mut()
                .find(|a| a.id == update.account_id)
            else {
                continue;
            };

            let delta = update.end_balance - account.balance;
            if delta.abs() < SETTLE_EPSILON {
                continue;
            }

            recorded.push(Transaction::Session(SessionEntry {
                id: generate_id("txn"),
                amount: delta.abs(),
                to_id: update.account_id.clone(),
                date: base + index as i64,
                is_profit: delta > 0.0,
            }));
            account.balance = update.end_balance;
        }

        if recorded.is_empty() {
            return Ok(0);
        }
        let count = recorded.len();
        recorded.append(&mut self.state.transactions);
        self.state.transactions = recorded;
        self.adapter.save(&self.state)?;
        Ok(count)
    }

    /// Move funds between two accounts. Declines (returns `false`, state
    /// untouched) on self-transfer, non-positive amount, or an unknown
    /// account on either end. Overdraft is allowed: balances may go
    /// negative.
    pub fn transfer(&mut self, from_id: &str, to_id: &str, amount: f64) -> Result<bool> {
        if from_id == to_id || amount <= 0.0 {
            return Ok(false);
        }
        if self.state.account(from_id).is_none() || self.state.account(to_id).is_none() {
            return Ok(false);
        }

        for account in &mut self.state.accounts {
            if account.id == from_id {
                account.balance -= amount;
            } else if account.id == to_id {
                account.balance += amount;
            }
        }
        self.state.transactions.insert(
            0,
            Transaction::Transfer(TransferEntry {
                id: generate_id("transfer"),
                amount,
                from_id: from_id.to_string(),
                to_id: to_id.to_string(),
                date: Utc::now().timestamp_millis(),
            }),
        );
        self.adapter.save(&self.state)?;
        Ok(true)
    }

    /// Create an account with a fresh id and zero balance. Names are not
    /// required to be unique. Returns the new account's id.
    pub fn add_account(&mut self, name: &str, r#type: AccountType, icon: &str) -> Result<String> {
        let id = generate_id("acc");
        self.state.accounts.push(Account {
            id: id.clone(),
            name: name.to_string(),
            r#type,
            balance: 0.0,
            icon: icon.to_string(),
            color: DEFAULT_COLOR.to_string(),
        });
        self.adapter.save(&self.state)?;
        Ok(id)
    }

    /// Merge the given fields into the matching account; unknown id is a
    /// no-op.
    pub fn update_account(&mut self, id: &str, patch: AccountPatch) -> Result<()> {
        let Some(account) = self.state.accounts.iter_mut().find(|a| a.id == id) else {
            return Ok(());
        };
        if let Some(name) = patch.name {
            account.name = name;
        }
        if let Some(ty) = patch.r#type {
            account.r#type = ty;
        }
        if let Some(icon) = patch.icon {
            account.icon = icon;
        }
        if let Some(balance) = patch.balance {
            account.balance = balance;
        }
        if let Some(color) = patch.color {
            account.color = color;
        }
        self.adapter.save(&self.state)?;
        Ok(())
    }

    /// Remove the account and every transaction referencing it, from either
    /// end. Irreversible; confirmation is the caller's job. Unknown id is a
    /// no-op.
    pub fn delete_account(&mut self, id: &str) -> Result<()> {
        if self.state.account(id).is_none() {
            return Ok(());
        }
        self.state.accounts.retain(|a| a.id != id);
        self.state.transactions.retain(|t| !t.references(id));
        self.adapter.save(&self.state)?;
        Ok(())
    }

    /// Replace the entire state from a serialized blob (backup restore).
    /// Malformed input is rejected without touching stored state.
    pub fn restore(&mut self, raw: &str) -> Result<()> {
        let state: Ledger =
            serde_json::from_str(raw).map_err(|e| anyhow::anyhow!("Invalid backup blob: {}", e))?;
        self.state = state;
        self.adapter.save(&self.state)?;
        Ok(())
    }
}
