// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::db::PersistenceAdapter;
use crate::store::LedgerStore;

pub fn handle<P: PersistenceAdapter>(
    store: &mut LedgerStore<P>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(store)?,
        Some(("restore", sub)) => restore(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Print the raw serialized blob for copy/paste backup. Falls back to
/// serializing the in-memory state when nothing is stored yet.
fn show<P: PersistenceAdapter>(store: &LedgerStore<P>) -> Result<()> {
    let raw = match store.adapter().raw() {
        Some(raw) => raw,
        None => serde_json::to_string(store.state())?,
    };
    println!("{}", raw);
    Ok(())
}

fn restore<P: PersistenceAdapter>(store: &mut LedgerStore<P>, sub: &clap::ArgMatches) -> Result<()> {
    let file = sub.get_one::<String>("file").unwrap();
    let raw =
        std::fs::read_to_string(file).with_context(|| format!("Read backup file '{}'", file))?;
    store.restore(raw.trim())?;
    println!(
        "Restored ledger: {} account(s), {} transaction(s)",
        store.accounts().len(),
        store.transactions().len()
    );
    Ok(())
}
