// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::db::PersistenceAdapter;
use crate::store::LedgerStore;
use crate::utils::{fmt_money, parse_amount};

pub fn handle<P: PersistenceAdapter>(
    store: &mut LedgerStore<P>,
    m: &clap::ArgMatches,
) -> Result<()> {
    let from = m.get_one::<String>("from").unwrap();
    let to = m.get_one::<String>("to").unwrap();
    let amount = parse_amount(m.get_one::<String>("amount").unwrap())?;

    if store.transfer(from, to, amount)? {
        println!("Moved {} from {} to {}", fmt_money(amount), from, to);
    } else {
        println!("Transfer declined (same account, non-positive amount, or unknown account)");
    }
    Ok(())
}
