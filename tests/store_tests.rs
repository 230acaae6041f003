// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::db;
use fintrack::models::TransactionKind::{Expense, Income};
use fintrack::store;
use rusqlite::Connection;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn scenario_initial_income_expense() {
    let conn = setup();
    store::set_initial_balance(&conn, dec("1000")).unwrap();
    store::add_transaction(&conn, day("2025-01-01"), Income, "Salary", dec("500"), None).unwrap();
    store::add_transaction(&conn, day("2025-01-02"), Expense, "Food", dec("200"), Some("")).unwrap();

    assert_eq!(store::get_balance(&conn).unwrap(), dec("1300"));
    let summary = store::get_category_summary(&conn).unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary["Food"], dec("200"));
}

#[test]
fn balance_matches_independent_sum() {
    let conn = setup();
    let initial = dec("250.75");
    store::set_initial_balance(&conn, initial).unwrap();

    // Small deterministic LCG so the sequence is varied but reproducible.
    let mut seed: u64 = 42;
    let mut expected = initial;
    for i in 0..200u32 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let cents = (seed >> 33) % 100_000;
        let amount = Decimal::new(cents as i64, 2);
        let kind = if seed % 3 == 0 { Income } else { Expense };
        let date = day("2024-01-01") + chrono::Duration::days((i % 90) as i64);
        store::add_transaction(&conn, date, kind, "Misc", amount, None).unwrap();
        match kind {
            Income => expected += amount,
            Expense => expected -= amount,
        }
    }
    assert_eq!(store::get_balance(&conn).unwrap(), expected);
}

#[test]
fn balance_without_initial_is_zero_based() {
    let conn = setup();
    assert_eq!(store::get_balance(&conn).unwrap(), Decimal::ZERO);
    store::add_transaction(&conn, day("2025-03-01"), Expense, "Food", dec("12.5"), None).unwrap();
    assert_eq!(store::get_balance(&conn).unwrap(), dec("-12.5"));
}

#[test]
fn initial_balance_overwrites() {
    let conn = setup();
    store::set_initial_balance(&conn, dec("100")).unwrap();
    store::set_initial_balance(&conn, dec("40")).unwrap();
    assert_eq!(store::get_initial_balance(&conn).unwrap(), dec("40"));
    assert_eq!(store::get_balance(&conn).unwrap(), dec("40"));
}

#[test]
fn category_summary_only_nonzero_expenses() {
    let conn = setup();
    store::add_transaction(&conn, day("2025-01-01"), Expense, "Food", dec("10"), None).unwrap();
    store::add_transaction(&conn, day("2025-01-02"), Expense, "Food", dec("5.25"), None).unwrap();
    store::add_transaction(&conn, day("2025-01-02"), Expense, "Bills", dec("0"), None).unwrap();
    store::add_transaction(&conn, day("2025-01-03"), Income, "Salary", dec("900"), None).unwrap();
    store::add_transaction(&conn, day("2025-01-03"), Income, "Food", dec("3"), None).unwrap();

    let summary = store::get_category_summary(&conn).unwrap();
    assert_eq!(summary.keys().collect::<Vec<_>>(), vec!["Food"]);
    assert_eq!(summary["Food"], dec("15.25"));
}

#[test]
fn negative_amounts_are_rejected() {
    let conn = setup();
    let err = store::add_transaction(&conn, day("2025-01-01"), Expense, "Food", dec("-1"), None)
        .unwrap_err();
    assert!(err.to_string().contains("must not be negative"));
    assert!(store::set_initial_balance(&conn, dec("-5")).is_err());
    assert!(store::set_budget(&conn, "Food", dec("-5")).is_err());
    assert!(store::load_transactions(&conn).unwrap().is_empty());
}

#[test]
fn store_accepts_category_not_matching_kind() {
    let conn = setup();
    store::add_category(&conn, Expense, "Food").unwrap();
    // Income filed under an expense-only category is stored as-is.
    store::add_transaction(&conn, day("2025-01-01"), Income, "Food", dec("1"), None).unwrap();
    assert_eq!(store::load_transactions(&conn).unwrap().len(), 1);
}

#[test]
fn load_transactions_keeps_insertion_order() {
    let conn = setup();
    let a = store::add_transaction(&conn, day("2025-05-01"), Expense, "A", dec("1"), None).unwrap();
    let b = store::add_transaction(&conn, day("2024-01-01"), Expense, "B", dec("2"), Some(" note ")).unwrap();
    let txs = store::load_transactions(&conn).unwrap();
    assert_eq!(txs.iter().map(|t| t.id).collect::<Vec<_>>(), vec![a, b]);
    assert_eq!(txs[1].note.as_deref(), Some("note"));
    assert_eq!(txs[0].note, None);
    assert_eq!(txs[0].kind, Expense);
}

#[test]
fn duplicate_category_is_a_noop() {
    let conn = setup();
    assert!(store::add_category(&conn, Expense, "Travel").unwrap());
    assert!(!store::add_category(&conn, Expense, "Travel").unwrap());
    assert_eq!(store::list_categories(&conn, Expense).unwrap(), vec!["Travel"]);
    // Same name under the other kind is a distinct pair.
    assert!(store::add_category(&conn, Income, "Travel").unwrap());
    assert_eq!(store::load_categories(&conn).unwrap().len(), 2);
}

#[test]
fn empty_category_name_is_rejected() {
    let conn = setup();
    assert!(store::add_category(&conn, Expense, "   ").is_err());
}

#[test]
fn budget_upsert_by_category() {
    let conn = setup();
    store::set_budget(&conn, "Food", dec("200")).unwrap();
    store::set_budget(&conn, "Food", dec("150")).unwrap();
    store::set_budget(&conn, "Bills", dec("80")).unwrap();
    let budgets = store::get_budgets(&conn).unwrap();
    assert_eq!(budgets.len(), 2);
    assert_eq!(budgets["Food"], dec("150"));
}

#[test]
fn reminders_and_goals_are_append_only() {
    let conn = setup();
    for _ in 0..2 {
        store::add_reminder(&conn, "Rent", day("2025-02-01"), dec("700"), "Bills").unwrap();
        store::add_saving_goal(&conn, "Bike", dec("900"), day("2025-12-31")).unwrap();
    }
    let reminders = store::get_reminders(&conn).unwrap();
    assert_eq!(reminders.len(), 2);
    assert_eq!(reminders[0].amount, dec("700"));
    let goals = store::get_saving_goals(&conn).unwrap();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[1].target_date, day("2025-12-31"));
}

#[test]
fn reset_all_clears_everything() {
    let conn = setup();
    store::set_initial_balance(&conn, dec("1000")).unwrap();
    store::add_transaction(&conn, day("2025-01-01"), Income, "Salary", dec("500"), None).unwrap();
    store::set_budget(&conn, "Food", dec("200")).unwrap();
    store::add_reminder(&conn, "Rent", day("2025-02-01"), dec("700"), "Bills").unwrap();
    store::add_saving_goal(&conn, "Bike", dec("900"), day("2025-12-31")).unwrap();
    store::add_category(&conn, Expense, "Food").unwrap();
    fintrack::utils::set_setting(&conn, "language", "vi").unwrap();

    store::reset_all(&conn).unwrap();

    assert!(store::load_transactions(&conn).unwrap().is_empty());
    assert!(store::get_budgets(&conn).unwrap().is_empty());
    assert!(store::get_reminders(&conn).unwrap().is_empty());
    assert!(store::get_saving_goals(&conn).unwrap().is_empty());
    assert!(store::load_categories(&conn).unwrap().is_empty());
    assert_eq!(store::get_balance(&conn).unwrap(), Decimal::ZERO);
    // Preferences survive.
    assert_eq!(
        fintrack::utils::get_setting(&conn, "language").unwrap().as_deref(),
        Some("vi")
    );
}

#[test]
fn missing_file_opens_as_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("fresh.sqlite");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let conn = db::open_at(&path).unwrap();
    assert!(store::load_transactions(&conn).unwrap().is_empty());
    assert_eq!(store::get_balance(&conn).unwrap(), Decimal::ZERO);
    assert!(path.exists());
}

#[test]
fn missing_table_is_recreated_on_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("heal.sqlite");
    {
        let conn = db::open_at(&path).unwrap();
        store::add_reminder(&conn, "Rent", day("2025-02-01"), dec("700"), "Bills").unwrap();
        conn.execute_batch("DROP TABLE transactions;").unwrap();
    }
    let conn = db::open_at(&path).unwrap();
    assert!(store::load_transactions(&conn).unwrap().is_empty());
    assert_eq!(store::get_reminders(&conn).unwrap().len(), 1);
}

#[test]
fn oversized_balance_is_an_error_not_a_crash() {
    let conn = setup();
    store::set_initial_balance(&conn, Decimal::MAX).unwrap();
    store::add_transaction(&conn, day("2025-01-01"), Income, "Salary", Decimal::MAX, None).unwrap();

    let err = store::get_balance(&conn).unwrap_err();
    assert!(err.to_string().contains("overflow"));
    // The data itself is still readable.
    assert_eq!(store::load_transactions(&conn).unwrap().len(), 1);
    assert!(store::get_category_summary(&conn).unwrap().is_empty());
}
