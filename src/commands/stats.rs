// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crate::analytics::{self, SEVEN_DAYS_MS};
use crate::db::PersistenceAdapter;
use crate::store::LedgerStore;
use crate::utils::{fmt_iso_date, fmt_money, fmt_signed, maybe_print_json, pretty_table};

pub fn handle<P: PersistenceAdapter>(store: &LedgerStore<P>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("overview", sub)) => overview(store, sub)?,
        Some(("curve", sub)) => curve(store, sub)?,
        Some(("recent", sub)) => recent(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct Overview {
    total_bankroll: f64,
    site_balance: f64,
    wallet_balance: f64,
    cash_balance: f64,
    sessions: usize,
    total_profit: f64,
    win_rate_pct: f64,
    average_profit: f64,
    best_session: f64,
    worst_session: f64,
    weekly_profit: f64,
    weekly_roi_pct: f64,
}

fn overview<P: PersistenceAdapter>(store: &LedgerStore<P>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let accounts = store.accounts();
    let transactions = store.transactions();
    let now = Utc::now().timestamp_millis();
    let total = analytics::total_balance(accounts);
    let comp = analytics::composition_by_type(accounts);

    let o = Overview {
        total_bankroll: total,
        site_balance: comp.site,
        wallet_balance: comp.wallet,
        cash_balance: comp.cash,
        sessions: analytics::session_count(transactions),
        total_profit: analytics::total_profit(transactions),
        win_rate_pct: analytics::win_rate(transactions),
        average_profit: analytics::average_profit(transactions),
        best_session: analytics::best_session(transactions),
        worst_session: analytics::worst_session(transactions),
        weekly_profit: analytics::windowed_profit(transactions, SEVEN_DAYS_MS, now),
        weekly_roi_pct: analytics::windowed_roi(transactions, SEVEN_DAYS_MS, now, total),
    };

    if !maybe_print_json(json_flag, jsonl_flag, &o)? {
        let data = vec![
            vec!["Total bankroll".to_string(), fmt_money(o.total_bankroll)],
            vec!["Sites".to_string(), fmt_money(o.site_balance)],
            vec!["Wallets".to_string(), fmt_money(o.wallet_balance)],
            vec!["Cash".to_string(), fmt_money(o.cash_balance)],
            vec!["Sessions".to_string(), o.sessions.to_string()],
            vec!["Total profit".to_string(), fmt_signed(o.total_profit)],
            vec!["Win rate".to_string(), format!("{:.1}%", o.win_rate_pct)],
            vec!["Avg profit".to_string(), fmt_signed(o.average_profit)],
            vec!["Best session".to_string(), fmt_signed(o.best_session)],
            vec!["Worst session".to_string(), fmt_signed(o.worst_session)],
            vec!["7d profit".to_string(), fmt_signed(o.weekly_profit)],
            vec!["7d ROI".to_string(), format!("{:.1}%", o.weekly_roi_pct)],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], data));
    }
    Ok(())
}

fn curve<P: PersistenceAdapter>(store: &LedgerStore<P>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let points = analytics::running_profit_curve(store.transactions());
    if !maybe_print_json(json_flag, jsonl_flag, &points)? {
        let data = points
            .iter()
            .map(|p| {
                vec![
                    p.session.to_string(),
                    fmt_signed(p.profit),
                    fmt_iso_date(p.date),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Session", "Cumulative profit", "Date"], data)
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct RecentRow {
    date: String,
    account: String,
    result: String,
}

fn recent<P: PersistenceAdapter>(store: &LedgerStore<P>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let limit = *sub.get_one::<usize>("limit").unwrap_or(&5);
    let state = store.state();
    let rows: Vec<RecentRow> = analytics::recent_sessions(store.transactions(), limit)
        .into_iter()
        .map(|s| RecentRow {
            date: fmt_iso_date(s.date),
            account: state
                .account(&s.to_id)
                .map(|a| a.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            result: fmt_signed(s.signed_delta()),
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .into_iter()
            .map(|r| vec![r.date, r.account, r.result])
            .collect();
        println!("{}", pretty_table(&["Date", "Account", "Result"], data));
    }
    Ok(())
}
