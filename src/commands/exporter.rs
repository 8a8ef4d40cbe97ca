// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::db::PersistenceAdapter;
use crate::models::{Ledger, Transaction};
use crate::store::LedgerStore;
use crate::utils::fmt_iso_date;

pub fn handle<P: PersistenceAdapter>(store: &LedgerStore<P>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store.state(), sub),
        _ => Ok(()),
    }
}

/// One export row per transaction: ISO date, type, resolved destination
/// account, amount magnitude, and a direction label. Unresolved account
/// references render as "Unknown" instead of failing the export.
pub struct ExportRow {
    pub date: String,
    pub r#type: String,
    pub account: String,
    pub amount: String,
    pub direction: String,
}

pub fn export_rows(state: &Ledger) -> Vec<ExportRow> {
    state
        .transactions
        .iter()
        .map(|t| {
            let account = match t {
                Transaction::Session(s) => state.account(&s.to_id),
                Transaction::Transfer(tr) => state.account(&tr.to_id),
            }
            .map(|a| a.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());
            let (ty, direction) = match t {
                Transaction::Session(s) => {
                    ("SESSION", if s.is_profit { "Profit" } else { "Loss" })
                }
                Transaction::Transfer(_) => ("TRANSFER", "Transfer"),
            };
            ExportRow {
                date: fmt_iso_date(t.date()),
                r#type: ty.to_string(),
                account,
                amount: format!("{}", t.amount()),
                direction: direction.to_string(),
            }
        })
        .collect()
}

fn export_transactions(state: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let rows = export_rows(state);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["Date", "Type", "Account", "Amount", "Direction"])?;
            for r in rows {
                wtr.write_record([r.date, r.r#type, r.account, r.amount, r.direction])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<serde_json::Value> = rows
                .iter()
                .map(|r| {
                    json!({
                        "date": r.date, "type": r.r#type, "account": r.account,
                        "amount": r.amount, "direction": r.direction
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            anyhow::bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
