// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::db::PersistenceAdapter;
use crate::models::{Ledger, Transaction};
use crate::store::LedgerStore;
use crate::utils::{fmt_iso_date, fmt_money, maybe_print_json, pretty_table};

#[derive(Serialize)]
pub struct HistoryRow {
    pub date: String,
    pub r#type: String,
    pub from: String,
    pub to: String,
    pub amount: String,
    pub direction: String,
}

fn resolve(state: &Ledger, id: &str) -> String {
    state
        .account(id)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Flatten the log into display rows, newest first. Unresolved account
/// references render as "Unknown" rather than failing the listing.
pub fn rows(state: &Ledger, limit: Option<usize>) -> Vec<HistoryRow> {
    let mut ordered: Vec<&Transaction> = state.transactions.iter().collect();
    ordered.sort_by_key(|t| std::cmp::Reverse(t.date()));
    if let Some(n) = limit {
        ordered.truncate(n);
    }
    ordered
        .into_iter()
        .map(|t| match t {
            Transaction::Session(s) => HistoryRow {
                date: fmt_iso_date(s.date),
                r#type: "SESSION".to_string(),
                from: String::new(),
                to: resolve(state, &s.to_id),
                amount: fmt_money(s.amount),
                direction: if s.is_profit { "Profit" } else { "Loss" }.to_string(),
            },
            Transaction::Transfer(tr) => HistoryRow {
                date: fmt_iso_date(tr.date),
                r#type: "TRANSFER".to_string(),
                from: resolve(state, &tr.from_id),
                to: resolve(state, &tr.to_id),
                amount: fmt_money(tr.amount),
                direction: "Transfer".to_string(),
            },
        })
        .collect()
}

pub fn handle<P: PersistenceAdapter>(store: &LedgerStore<P>, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let limit = m.get_one::<usize>("limit").copied();
    let data = rows(store.state(), limit);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let table_rows = data
            .into_iter()
            .map(|r| vec![r.date, r.r#type, r.from, r.to, r.amount, r.direction])
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "From", "To", "Amount", "Direction"],
                table_rows
            )
        );
    }
    Ok(())
}
