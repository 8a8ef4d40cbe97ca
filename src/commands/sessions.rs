// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::db::PersistenceAdapter;
use crate::store::{LedgerStore, SessionUpdate};

pub fn handle<P: PersistenceAdapter>(
    store: &mut LedgerStore<P>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("settle", sub)) => settle(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Parse `ID=END_BALANCE` pairs, dropping blank or non-numeric entries.
/// Filtering malformed input here keeps the store's contract simple: it
/// only ever sees well-formed pairs (unknown ids it still skips itself).
pub fn parse_updates(raw: &[String]) -> Vec<SessionUpdate> {
    raw.iter()
        .filter_map(|pair| {
            let (id, bal) = pair.split_once('=')?;
            let id = id.trim();
            if id.is_empty() {
                return None;
            }
            let end_balance = bal.trim().parse::<f64>().ok()?;
            if !end_balance.is_finite() {
                return None;
            }
            Some(SessionUpdate {
                account_id: id.to_string(),
                end_balance,
            })
        })
        .collect()
}

fn settle<P: PersistenceAdapter>(store: &mut LedgerStore<P>, sub: &clap::ArgMatches) -> Result<()> {
    let raw: Vec<String> = sub
        .get_many::<String>("set")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let updates = parse_updates(&raw);
    let skipped = raw.len() - updates.len();
    if skipped > 0 {
        eprintln!("Skipped {} malformed pair(s)", skipped);
    }
    let recorded = store.settle_sessions(&updates)?;
    if recorded == 0 {
        println!("No sessions recorded (no balance changed by 0.01 or more)");
    } else {
        println!("Recorded {} session(s)", recorded);
    }
    Ok(())
}
