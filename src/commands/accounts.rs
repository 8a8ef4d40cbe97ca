// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::db::PersistenceAdapter;
use crate::models::AccountType;
use crate::store::{AccountPatch, LedgerStore};
use crate::utils::{fmt_money, maybe_print_json, parse_amount, pretty_table};

pub fn handle<P: PersistenceAdapter>(
    store: &mut LedgerStore<P>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<P: PersistenceAdapter>(store: &mut LedgerStore<P>, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let r#type: AccountType = sub.get_one::<String>("type").unwrap().parse()?;
    let icon = sub.get_one::<String>("icon").unwrap();
    let id = store.add_account(name, r#type, icon)?;
    println!("Added account '{}' ({}, id: {})", name, r#type, id);
    Ok(())
}

#[derive(Serialize)]
struct AccountRow {
    id: String,
    name: String,
    r#type: String,
    icon: String,
    balance: String,
}

fn list<P: PersistenceAdapter>(store: &LedgerStore<P>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let rows: Vec<AccountRow> = store
        .accounts()
        .iter()
        .map(|a| AccountRow {
            id: a.id.clone(),
            name: a.name.clone(),
            r#type: a.r#type.to_string(),
            icon: a.icon.clone(),
            balance: fmt_money(a.balance),
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .into_iter()
            .map(|r| vec![r.id, r.name, r.r#type, r.icon, r.balance])
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Type", "Icon", "Balance"], data)
        );
    }
    Ok(())
}

fn edit<P: PersistenceAdapter>(store: &mut LedgerStore<P>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let patch = AccountPatch {
        name: sub.get_one::<String>("name").cloned(),
        r#type: sub
            .get_one::<String>("type")
            .map(|s| s.parse::<AccountType>())
            .transpose()?,
        icon: sub.get_one::<String>("icon").cloned(),
        balance: sub
            .get_one::<String>("balance")
            .map(|s| parse_amount(s))
            .transpose()?,
        color: sub.get_one::<String>("color").cloned(),
    };
    store.update_account(id, patch)?;
    println!("Updated account {}", id);
    Ok(())
}

fn rm<P: PersistenceAdapter>(store: &mut LedgerStore<P>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if !sub.get_flag("yes") {
        anyhow::bail!(
            "Deleting an account destroys its entire transaction history; re-run with --yes to confirm"
        );
    }
    let name = store
        .state()
        .account(id)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| id.to_string());
    store.delete_account(id)?;
    println!("Removed account '{}' and its history", name);
    Ok(())
}
