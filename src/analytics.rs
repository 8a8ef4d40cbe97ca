// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure derivations over the transaction log. Every function is total over
//! an empty log: zero-session and zero-base cases return 0, never
//! NaN/Infinity.

use serde::Serialize;

use crate::models::{Account, AccountType, SessionEntry, Transaction};

pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
pub const SEVEN_DAYS_MS: i64 = 7 * MS_PER_DAY;

pub fn total_balance(accounts: &[Account]) -> f64 {
    accounts.iter().map(|a| a.balance).sum()
}

/// Balance totals per account type. All three types are always present,
/// reporting 0 when no account of that type exists.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Composition {
    pub site: f64,
    pub wallet: f64,
    pub cash: f64,
}

pub fn composition_by_type(accounts: &[Account]) -> Composition {
    let mut comp = Composition::default();
    for account in accounts {
        match account.r#type {
            AccountType::Site => comp.site += account.balance,
            AccountType::Wallet => comp.wallet += account.balance,
            AccountType::Cash => comp.cash += account.balance,
        }
    }
    comp
}

fn sessions(transactions: &[Transaction]) -> impl Iterator<Item = &SessionEntry> {
    transactions.iter().filter_map(|t| t.as_session())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurvePoint {
    /// 1-based session index in chronological order.
    pub session: usize,
    /// Cumulative profit after this session.
    pub profit: f64,
    pub date: i64,
}

/// Cumulative profit curve: sessions in ascending date order, one point per
/// session. The sort is stable, so same-date sessions keep their log order
/// across repeated calls.
pub fn running_profit_curve(transactions: &[Transaction]) -> Vec<CurvePoint> {
    let mut ordered: Vec<&SessionEntry> = sessions(transactions).collect();
    ordered.sort_by_key(|s| s.date);

    let mut running = 0.0;
    ordered
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            running += s.signed_delta();
            CurvePoint {
                session: idx + 1,
                profit: running,
                date: s.date,
            }
        })
        .collect()
}

/// Net session profit inside the trailing window `(now - window_ms, now]`.
pub fn windowed_profit(transactions: &[Transaction], window_ms: i64, now: i64) -> f64 {
    sessions(transactions)
        .filter(|s| s.date > now - window_ms)
        .map(|s| s.signed_delta())
        .sum()
}

/// Windowed profit relative to the bankroll at the start of the window,
/// as a percentage. Zero when the starting balance is zero or negative.
pub fn windowed_roi(transactions: &[Transaction], window_ms: i64, now: i64, current_total: f64) -> f64 {
    let profit = windowed_profit(transactions, window_ms, now);
    let starting = current_total - profit;
    if starting > 0.0 {
        profit / starting * 100.0
    } else {
        0.0
    }
}

pub fn session_count(transactions: &[Transaction]) -> usize {
    sessions(transactions).count()
}

pub fn total_profit(transactions: &[Transaction]) -> f64 {
    sessions(transactions).map(|s| s.signed_delta()).sum()
}

/// Winning sessions over all sessions, as a percentage. Zero with no
/// sessions.
pub fn win_rate(transactions: &[Transaction]) -> f64 {
    let total = session_count(transactions);
    if total == 0 {
        return 0.0;
    }
    let wins = sessions(transactions).filter(|s| s.is_profit).count();
    wins as f64 / total as f64 * 100.0
}

pub fn average_profit(transactions: &[Transaction]) -> f64 {
    let total = session_count(transactions);
    if total == 0 {
        return 0.0;
    }
    total_profit(transactions) / total as f64
}

pub fn best_session(transactions: &[Transaction]) -> f64 {
    sessions(transactions)
        .map(|s| s.signed_delta())
        .reduce(f64::max)
        .unwrap_or(0.0)
}

pub fn worst_session(transactions: &[Transaction]) -> f64 {
    sessions(transactions)
        .map(|s| s.signed_delta())
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// The `n` most recent sessions, newest first.
pub fn recent_sessions(transactions: &[Transaction], n: usize) -> Vec<&SessionEntry> {
    let mut ordered: Vec<&SessionEntry> = sessions(transactions).collect();
    ordered.sort_by_key(|s| std::cmp::Reverse(s.date));
    ordered.truncate(n);
    ordered
}
