// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use acetrack::db::{JsonFileAdapter, MemoryAdapter, PersistenceAdapter};
use acetrack::models::{AccountType, Ledger};
use acetrack::store::{LedgerStore, SessionUpdate};
use tempfile::tempdir;

#[test]
fn empty_storage_loads_the_seed() {
    let ledger = MemoryAdapter::new().load();
    assert_eq!(ledger, Ledger::seed());
    assert_eq!(ledger.accounts.len(), 5);
    assert!(ledger.accounts.iter().all(|a| a.balance == 0.0));
    assert!(ledger.transactions.is_empty());

    let names: Vec<&str> = ledger.accounts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["CoinPoker", "GG Poker", "MetaMask", "Ledger", "Cash Wallet"]
    );
}

#[test]
fn corrupt_blob_falls_back_to_the_seed() {
    let adapter = MemoryAdapter::with_raw("{not json at all");
    assert_eq!(adapter.load(), Ledger::seed());
}

#[test]
fn memory_round_trip_preserves_state_field_for_field() {
    let adapter = MemoryAdapter::new();
    let mut store = LedgerStore::open(adapter.clone());
    store
        .settle_sessions(&[
            SessionUpdate {
                account_id: "1".to_string(),
                end_balance: 123.45,
            },
            SessionUpdate {
                account_id: "2".to_string(),
                end_balance: 67.0,
            },
        ])
        .unwrap();
    store.transfer("1", "4", 23.45).unwrap();
    store.add_account("Stars", AccountType::Site, "⭐️").unwrap();

    let reopened = LedgerStore::open(adapter);
    assert_eq!(reopened.state(), store.state());
}

#[test]
fn file_round_trip_preserves_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut store = LedgerStore::open(JsonFileAdapter::new(path.clone()));
    store
        .settle_sessions(&[SessionUpdate {
            account_id: "3".to_string(),
            end_balance: 500.0,
        }])
        .unwrap();
    store.transfer("3", "5", 100.0).unwrap();

    let reopened = LedgerStore::open(JsonFileAdapter::new(path));
    assert_eq!(reopened.state(), store.state());
}

#[test]
fn corrupt_file_falls_back_to_the_seed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, "garbage!!").unwrap();

    let store = LedgerStore::open(JsonFileAdapter::new(path));
    assert_eq!(store.state(), &Ledger::seed());
}

#[test]
fn persisted_blob_uses_the_original_field_names() {
    let adapter = MemoryAdapter::new();
    let mut store = LedgerStore::open(adapter.clone());
    store
        .settle_sessions(&[SessionUpdate {
            account_id: "1".to_string(),
            end_balance: 10.0,
        }])
        .unwrap();
    store.transfer("1", "2", 5.0).unwrap();

    let raw = adapter.raw().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let txns = v["transactions"].as_array().unwrap();
    // Newest first: the transfer precedes the session.
    assert_eq!(txns[0]["type"], "TRANSFER");
    assert!(txns[0]["fromId"].is_string());
    assert!(txns[0]["toId"].is_string());
    assert_eq!(txns[1]["type"], "SESSION");
    assert_eq!(txns[1]["isProfit"], true);
}

#[test]
fn restore_replaces_state_and_rejects_garbage() {
    let adapter = MemoryAdapter::new();
    let mut store = LedgerStore::open(adapter.clone());
    store
        .settle_sessions(&[SessionUpdate {
            account_id: "1".to_string(),
            end_balance: 42.0,
        }])
        .unwrap();
    let blob = adapter.raw().unwrap();

    let mut other = LedgerStore::open(MemoryAdapter::new());
    other.restore(&blob).unwrap();
    assert_eq!(other.state(), store.state());

    let before = other.state().clone();
    assert!(other.restore("{broken").is_err());
    assert_eq!(other.state(), &before);
}
