// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::commands::reports;
use fintrack::models::TransactionKind::{Expense, Income};
use fintrack::{db, store};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    let d = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    store::set_initial_balance(&conn, dec("1000")).unwrap();
    store::add_transaction(&conn, d, Income, "Salary", dec("500"), None).unwrap();
    store::add_transaction(&conn, d, Expense, "Food", dec("150"), None).unwrap();
    store::add_transaction(&conn, d, Expense, "Transport", dec("50"), None).unwrap();
    conn
}

#[test]
fn shares_sorted_largest_first() {
    let conn = setup();
    let shares = reports::category_shares(&conn).unwrap();
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].category, "Food");
    assert_eq!(shares[0].share, dec("75"));
    assert_eq!(shares[1].share, dec("25"));
}

#[test]
fn overview_totals() {
    let conn = setup();
    let o = reports::overview_data(&conn).unwrap();
    assert_eq!(o.initial_balance, dec("1000"));
    assert_eq!(o.total_income, dec("500"));
    assert_eq!(o.total_expense, dec("200"));
    assert_eq!(o.balance, dec("1300"));
    assert_eq!(o.transactions, 3);
}

#[test]
fn empty_store_has_no_shares() {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    assert!(reports::category_shares(&conn).unwrap().is_empty());
    assert_eq!(reports::overview_data(&conn).unwrap().balance, Decimal::ZERO);
}
