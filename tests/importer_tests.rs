// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::backup::Backup;
use fintrack::models::TransactionKind::{Expense, Income};
use fintrack::models::Transaction;
use fintrack::state::AppState;
use fintrack::{cli, commands::importer, db, store};
use rusqlite::Connection;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn seed(conn: &Connection) {
    store::set_initial_balance(conn, "1000".parse().unwrap()).unwrap();
    store::add_transaction(conn, day("2025-01-02"), Income, "Salary", "500".parse().unwrap(), None)
        .unwrap();
    store::add_transaction(conn, day("2025-01-03"), Expense, "Food", "200".parse().unwrap(), Some("market"))
        .unwrap();
    store::set_budget(conn, "Food", "300".parse().unwrap()).unwrap();
    store::add_reminder(conn, "Rent", day("2025-02-01"), "700".parse().unwrap(), "Bills").unwrap();
    store::add_saving_goal(conn, "Bike", "900".parse().unwrap(), day("2025-06-01")).unwrap();
}

fn run_import(conn: &mut Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut state = AppState::open(conn, None).unwrap();
    let mut argv = vec!["fintrack", "import"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, import_m) = matches.subcommand().unwrap();
    importer::handle(conn, &mut state, import_m)
}

fn without_ids(mut txs: Vec<Transaction>) -> Vec<Transaction> {
    for t in &mut txs {
        t.id = 0;
    }
    txs
}

#[test]
fn backup_round_trip_restores_state() {
    let mut conn = setup();
    seed(&conn);
    let dir = tempdir().unwrap();
    let path = dir.path().join("backup.json");
    Backup::from_store(&conn).unwrap().write(&path).unwrap();
    let before = without_ids(store::load_transactions(&conn).unwrap());

    store::reset_all(&conn).unwrap();
    store::add_transaction(&conn, day("2025-03-01"), Expense, "Junk", "1".parse().unwrap(), None)
        .unwrap();

    run_import(&mut conn, &["backup", "--path", path.to_str().unwrap(), "--yes"]).unwrap();

    assert_eq!(without_ids(store::load_transactions(&conn).unwrap()), before);
    assert_eq!(store::get_balance(&conn).unwrap(), "1300".parse().unwrap());
    assert_eq!(store::get_budgets(&conn).unwrap().len(), 1);
    assert_eq!(store::get_reminders(&conn).unwrap()[0].name, "Rent");
    assert_eq!(store::get_saving_goals(&conn).unwrap()[0].name, "Bike");
}

#[test]
fn minimal_backup_without_optional_fields() {
    let mut conn = setup();
    seed(&conn);
    let dir = tempdir().unwrap();
    let path = dir.path().join("min.json");
    fs::write(
        &path,
        r#"{
            "transactions": [
                {"date": "2025-05-01", "kind": "expense", "category": "Food", "amount": "9.90", "note": null}
            ],
            "budgets": {"Transport": "40"},
            "reminders": [],
            "saving_goals": []
        }"#,
    )
    .unwrap();

    run_import(&mut conn, &["backup", "--path", path.to_str().unwrap(), "--yes"]).unwrap();

    let txs = store::load_transactions(&conn).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].amount, "9.90".parse().unwrap());
    assert_eq!(store::get_initial_balance(&conn).unwrap(), rust_decimal::Decimal::ZERO);
    assert!(store::get_saving_goals(&conn).unwrap().is_empty());
}

#[test]
fn unparseable_backup_leaves_store_untouched() {
    let mut conn = setup();
    seed(&conn);
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"transactions": ["#).unwrap();

    let err = run_import(&mut conn, &["backup", "--path", path.to_str().unwrap(), "--yes"])
        .unwrap_err();
    assert!(err.to_string().contains("Import error"));
    assert_eq!(store::load_transactions(&conn).unwrap().len(), 2);

    // Missing required collection.
    fs::write(&path, r#"{"transactions": [], "budgets": {}}"#).unwrap();
    assert!(run_import(&mut conn, &["backup", "--path", path.to_str().unwrap(), "--yes"]).is_err());
    assert_eq!(store::get_reminders(&conn).unwrap().len(), 1);
}

#[test]
fn replay_failure_keeps_records_before_it() {
    let mut conn = setup();
    seed(&conn);
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{
            "transactions": [
                {"date": "2025-05-01", "kind": "income", "category": "Salary", "amount": "10"},
                {"date": "2025-05-02", "kind": "expense", "category": "Food", "amount": "-3"}
            ],
            "budgets": {},
            "reminders": [],
            "saving_goals": []
        }"#,
    )
    .unwrap();

    assert!(run_import(&mut conn, &["backup", "--path", path.to_str().unwrap(), "--yes"]).is_err());
    let txs = store::load_transactions(&conn).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].category, "Salary");
    assert!(store::get_budgets(&conn).unwrap().is_empty());
}

#[test]
fn csv_import_appends_and_registers_categories() {
    let mut conn = setup();
    seed(&conn);
    let dir = tempdir().unwrap();
    let path = dir.path().join("tx.csv");
    fs::write(
        &path,
        "date,kind,category,amount,note\n2025-04-01,expense,Pets,25.00,vet\n2025-04-02,income,Freelance,300,\n",
    )
    .unwrap();

    run_import(&mut conn, &["transactions", "--path", path.to_str().unwrap()]).unwrap();

    let txs = store::load_transactions(&conn).unwrap();
    assert_eq!(txs.len(), 4);
    assert_eq!(txs[2].note.as_deref(), Some("vet"));
    assert_eq!(txs[3].note, None);
    let expense = store::list_categories(&conn, Expense).unwrap();
    assert!(expense.contains(&"Pets".to_string()));
    let income = store::list_categories(&conn, Income).unwrap();
    assert!(income.contains(&"Freelance".to_string()));
}

#[test]
fn csv_bad_row_rolls_back_whole_file() {
    let mut conn = setup();
    let dir = tempdir().unwrap();
    let path = dir.path().join("tx.csv");
    fs::write(
        &path,
        "date,kind,category,amount,note\n2025-04-01,expense,Food,5,\n2025-04-02,transfer,Food,5,\n",
    )
    .unwrap();

    let err = run_import(&mut conn, &["transactions", "--path", path.to_str().unwrap()])
        .unwrap_err();
    assert!(format!("{:#}", err).contains("Row 3"));
    assert!(store::load_transactions(&conn).unwrap().is_empty());
}

#[test]
fn restore_reports_counts() {
    let conn = setup();
    seed(&conn);
    let dir = tempdir().unwrap();
    let path = dir.path().join("backup.json");
    Backup::from_store(&conn).unwrap().write(&path).unwrap();

    let mut state = AppState::open(&conn, None).unwrap();
    let counts = importer::run_backup(&conn, &mut state, &path, true, Cursor::new(""))
        .unwrap()
        .unwrap();
    assert_eq!(counts.transactions, 2);
    assert_eq!(counts.budgets, 1);
    assert_eq!(counts.reminders, 1);
    assert_eq!(counts.saving_goals, 1);
}

#[test]
fn declined_backup_import_is_not_an_error() {
    let conn = setup();
    seed(&conn);
    let dir = tempdir().unwrap();
    let path = dir.path().join("backup.json");
    fs::write(
        &path,
        r#"{"transactions": [], "budgets": {}, "reminders": [], "saving_goals": []}"#,
    )
    .unwrap();

    let mut state = AppState::open(&conn, None).unwrap();
    let outcome =
        importer::run_backup(&conn, &mut state, &path, false, Cursor::new("no\n")).unwrap();
    assert!(outcome.is_none());
    assert_eq!(store::load_transactions(&conn).unwrap().len(), 2);
    assert_eq!(store::get_budgets(&conn).unwrap().len(), 1);
}
