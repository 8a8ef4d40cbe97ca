// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Default color assigned to accounts created through `add_account`.
pub const DEFAULT_COLOR: &str = "bg-indigo-500";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Site,
    Wallet,
    Cash,
}

impl AccountType {
    pub const ALL: [AccountType; 3] = [AccountType::Site, AccountType::Wallet, AccountType::Cash];
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccountType::Site => "Site",
            AccountType::Wallet => "Wallet",
            AccountType::Cash => "Cash",
        };
        f.write_str(s)
    }
}

impl FromStr for AccountType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "site" => Ok(AccountType::Site),
            "wallet" => Ok(AccountType::Wallet),
            "cash" => Ok(AccountType::Cash),
            other => Err(anyhow::anyhow!(
                "Invalid account type '{}' (use Site|Wallet|Cash)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub r#type: AccountType,
    pub balance: f64,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    pub id: String,
    pub amount: f64,
    pub to_id: String,
    pub date: i64,
    pub is_profit: bool,
}

impl SessionEntry {
    /// Signed balance change this session produced.
    pub fn signed_delta(&self) -> f64 {
        if self.is_profit { self.amount } else { -self.amount }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEntry {
    pub id: String,
    pub amount: f64,
    pub from_id: String,
    pub to_id: String,
    pub date: i64,
}

/// A ledger event. Sessions settle one account; transfers move funds
/// between two accounts. Entries are immutable once recorded — the only
/// way they leave the log is the cascading account delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Transaction {
    #[serde(rename = "SESSION")]
    Session(SessionEntry),
    #[serde(rename = "TRANSFER")]
    Transfer(TransferEntry),
}

impl Transaction {
    pub fn id(&self) -> &str {
        match self {
            Transaction::Session(s) => &s.id,
            Transaction::Transfer(t) => &t.id,
        }
    }

    pub fn date(&self) -> i64 {
        match self {
            Transaction::Session(s) => s.date,
            Transaction::Transfer(t) => t.date,
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            Transaction::Session(s) => s.amount,
            Transaction::Transfer(t) => t.amount,
        }
    }

    pub fn as_session(&self) -> Option<&SessionEntry> {
        match self {
            Transaction::Session(s) => Some(s),
            Transaction::Transfer(_) => None,
        }
    }

    /// Whether this entry references the given account as source or
    /// destination. Drives the cascading delete.
    pub fn references(&self, account_id: &str) -> bool {
        match self {
            Transaction::Session(s) => s.to_id == account_id,
            Transaction::Transfer(t) => t.from_id == account_id || t.to_id == account_id,
        }
    }
}

/// The full persisted state: the unit of load/save. Transactions are kept
/// newest-first (mutations prepend).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ledger {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    /// Fixed starter set used when storage is empty or unreadable.
    pub fn seed() -> Ledger {
        let starter = [
            ("1", "CoinPoker", AccountType::Site, "♠️", "bg-red-500"),
            ("2", "GG Poker", AccountType::Site, "🃏", "bg-yellow-600"),
            ("3", "MetaMask", AccountType::Wallet, "🦊", "bg-orange-500"),
            ("4", "Ledger", AccountType::Wallet, "🛡️", "bg-blue-600"),
            ("5", "Cash Wallet", AccountType::Cash, "💵", "bg-green-600"),
        ];
        Ledger {
            accounts: starter
                .into_iter()
                .map(|(id, name, ty, icon, color)| Account {
                    id: id.to_string(),
                    name: name.to_string(),
                    r#type: ty,
                    balance: 0.0,
                    icon: icon.to_string(),
                    color: color.to_string(),
                })
                .collect(),
            transactions: Vec::new(),
        }
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }
}

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Collision-resistant id: epoch millis plus a process-wide counter. Unique
/// for the store lifetime and stable across same-millisecond bursts.
pub fn generate_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, millis, seq)
}
