// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use acetrack::db::JsonFileAdapter;
use acetrack::store::LedgerStore;
use acetrack::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let adapter = JsonFileAdapter::open_default()?;
    let mut store = LedgerStore::open(adapter);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger file at {}", db::ledger_path()?.display());
        }
        Some(("account", sub)) => commands::accounts::handle(&mut store, sub)?,
        Some(("session", sub)) => commands::sessions::handle(&mut store, sub)?,
        Some(("transfer", sub)) => commands::transfer::handle(&mut store, sub)?,
        Some(("history", sub)) => commands::history::handle(&store, sub)?,
        Some(("stats", sub)) => commands::stats::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("backup", sub)) => commands::backup::handle(&mut store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
