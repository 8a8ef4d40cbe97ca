// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use acetrack::analytics::{
    self, Composition, MS_PER_DAY, SEVEN_DAYS_MS,
};
use acetrack::models::{Account, AccountType, SessionEntry, Transaction, TransferEntry};

fn session(id: &str, date: i64, delta: f64) -> Transaction {
    Transaction::Session(SessionEntry {
        id: id.to_string(),
        amount: delta.abs(),
        to_id: "1".to_string(),
        date,
        is_profit: delta > 0.0,
    })
}

fn transfer(id: &str, date: i64, amount: f64) -> Transaction {
    Transaction::Transfer(TransferEntry {
        id: id.to_string(),
        amount,
        from_id: "1".to_string(),
        to_id: "2".to_string(),
        date,
    })
}

fn account(ty: AccountType, balance: f64) -> Account {
    Account {
        id: format!("{}-{}", ty, balance),
        name: ty.to_string(),
        r#type: ty,
        balance,
        icon: "♠️".to_string(),
        color: "bg-indigo-500".to_string(),
    }
}

#[test]
fn empty_log_yields_zero_everywhere() {
    let none: Vec<Transaction> = Vec::new();
    assert_eq!(analytics::win_rate(&none), 0.0);
    assert_eq!(analytics::average_profit(&none), 0.0);
    assert_eq!(analytics::best_session(&none), 0.0);
    assert_eq!(analytics::worst_session(&none), 0.0);
    assert_eq!(analytics::total_profit(&none), 0.0);
    assert_eq!(analytics::session_count(&none), 0);
    assert!(analytics::running_profit_curve(&none).is_empty());
    assert!(analytics::recent_sessions(&none, 5).is_empty());
    assert_eq!(analytics::windowed_profit(&none, SEVEN_DAYS_MS, 0), 0.0);

    // Zero starting balance must guard the division, not produce NaN.
    let roi = analytics::windowed_roi(&none, SEVEN_DAYS_MS, 0, 0.0);
    assert_eq!(roi, 0.0);
    assert!(roi.is_finite());
}

#[test]
fn running_curve_sorts_by_date_and_accumulates() {
    // Log order [3, 1, 2]; curve must come out in date order 1, 2, 3.
    let txns = vec![
        session("a", 3, 10.0),
        session("b", 1, 5.0),
        session("c", 2, -2.0),
    ];
    let curve = analytics::running_profit_curve(&txns);
    assert_eq!(curve.len(), 3);
    assert_eq!(
        curve.iter().map(|p| p.date).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(
        curve.iter().map(|p| p.profit).collect::<Vec<_>>(),
        vec![5.0, 3.0, 13.0]
    );
    assert_eq!(
        curve.iter().map(|p| p.session).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn running_curve_ignores_transfers_and_is_deterministic() {
    let txns = vec![
        session("a", 5, 10.0),
        transfer("t", 4, 100.0),
        session("b", 5, -3.0),
    ];
    let first = analytics::running_profit_curve(&txns);
    assert_eq!(first.len(), 2);
    // Tied dates keep log order, on every call.
    assert_eq!(first, analytics::running_profit_curve(&txns));
    assert_eq!(first[0].profit, 10.0);
    assert_eq!(first[1].profit, 7.0);
}

#[test]
fn windowed_profit_respects_the_cutoff() {
    let now = 100 * MS_PER_DAY;
    let txns = vec![
        session("old", now - 8 * MS_PER_DAY, 100.0),
        session("in", now - 3 * MS_PER_DAY, 40.0),
        session("in2", now - MS_PER_DAY, -15.0),
    ];
    assert_eq!(analytics::windowed_profit(&txns, SEVEN_DAYS_MS, now), 25.0);
    // Boundary: date must be strictly greater than now - window.
    let boundary = vec![session("edge", now - SEVEN_DAYS_MS, 50.0)];
    assert_eq!(analytics::windowed_profit(&boundary, SEVEN_DAYS_MS, now), 0.0);
}

#[test]
fn windowed_roi_relative_to_starting_bankroll() {
    let now = 100 * MS_PER_DAY;
    let txns = vec![session("a", now - MS_PER_DAY, 50.0)];
    // Current total 150 with 50 profit this week: starting bankroll 100.
    let roi = analytics::windowed_roi(&txns, SEVEN_DAYS_MS, now, 150.0);
    assert_eq!(roi, 50.0);

    // Negative starting bankroll guards to zero.
    assert_eq!(analytics::windowed_roi(&txns, SEVEN_DAYS_MS, now, 20.0), 0.0);
}

#[test]
fn win_rate_and_average_profit() {
    let txns = vec![
        session("a", 1, 10.0),
        session("b", 2, -4.0),
        session("c", 3, 6.0),
        session("d", 4, -6.0),
        transfer("t", 5, 99.0),
    ];
    assert_eq!(analytics::win_rate(&txns), 50.0);
    assert_eq!(analytics::average_profit(&txns), 1.5);
    assert_eq!(analytics::total_profit(&txns), 6.0);
    assert_eq!(analytics::session_count(&txns), 4);
}

#[test]
fn best_and_worst_session() {
    let txns = vec![
        session("a", 1, 10.0),
        session("b", 2, -25.0),
        session("c", 3, 6.0),
    ];
    assert_eq!(analytics::best_session(&txns), 10.0);
    assert_eq!(analytics::worst_session(&txns), -25.0);

    // All-loss log: best is the least bad delta, not zero.
    let losses = vec![session("a", 1, -5.0), session("b", 2, -2.0)];
    assert_eq!(analytics::best_session(&losses), -2.0);
}

#[test]
fn recent_sessions_newest_first_with_limit() {
    let txns = vec![
        session("a", 10, 1.0),
        session("b", 30, 2.0),
        transfer("t", 40, 9.0),
        session("c", 20, 3.0),
    ];
    let recent = analytics::recent_sessions(&txns, 2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].date, 30);
    assert_eq!(recent[1].date, 20);
}

#[test]
fn composition_reports_all_three_types() {
    let accounts = vec![
        account(AccountType::Site, 100.0),
        account(AccountType::Site, 50.0),
        account(AccountType::Cash, -10.0),
    ];
    let comp = analytics::composition_by_type(&accounts);
    assert_eq!(
        comp,
        Composition {
            site: 150.0,
            wallet: 0.0,
            cash: -10.0
        }
    );
    assert_eq!(analytics::total_balance(&accounts), 140.0);
}
