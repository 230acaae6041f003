// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::state::AppState;
use fintrack::{cli, commands::transactions, db, store};
use rusqlite::{Connection, params};

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    for i in 1..=3 {
        conn.execute(
            "INSERT INTO transactions(date,kind,category,amount,note) VALUES (?1,'expense','Food','10','')",
            params![format!("2025-01-0{}", i)],
        )
        .unwrap();
    }
    conn.execute(
        "INSERT INTO transactions(date,kind,category,amount,note) VALUES ('2025-02-01','income','Salary','900',NULL)",
        [],
    )
    .unwrap();
    conn
}

fn run_tx(conn: &Connection, state: &mut AppState, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["fintrack", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("tx", tx_m)) => transactions::handle(conn, state, tx_m),
        _ => panic!("no tx subcommand"),
    }
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["fintrack", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, tx_m) = matches.subcommand().unwrap();
    let (_, list_m) = tx_m.subcommand().unwrap();
    list_m.clone()
}

#[test]
fn list_limit_respected() {
    let conn = setup();
    let rows = transactions::query_rows(&conn, &list_matches(&["--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-02-01");
    assert_eq!(rows[1].date, "2025-01-03");
}

#[test]
fn list_filters_by_kind_and_month() {
    let conn = setup();
    let rows = transactions::query_rows(&conn, &list_matches(&["--kind", "expense"])).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.kind == "expense"));

    let rows = transactions::query_rows(&conn, &list_matches(&["--month", "2025-02"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "Salary");
    assert_eq!(rows[0].note, "");
}

#[test]
fn list_rejects_bad_month() {
    let conn = setup();
    assert!(transactions::query_rows(&conn, &list_matches(&["--month", "2025-13"])).is_err());
}

#[test]
fn add_records_registered_category() {
    let conn = setup();
    let mut state = AppState::open(&conn, None).unwrap();
    run_tx(
        &conn,
        &mut state,
        &[
            "add", "--date", "2025-03-04", "--kind", "expense", "--category", "Transport",
            "--amount", "7.25", "--note", "bus",
        ],
    )
    .unwrap();

    let txs = store::load_transactions(&conn).unwrap();
    let last = txs.last().unwrap();
    assert_eq!(last.category, "Transport");
    assert_eq!(last.amount, "7.25".parse().unwrap());
    assert_eq!(last.note.as_deref(), Some("bus"));
}

#[test]
fn add_rejects_category_of_other_kind() {
    let conn = setup();
    let mut state = AppState::open(&conn, None).unwrap();
    let err = run_tx(
        &conn,
        &mut state,
        &[
            "add", "--date", "2025-03-04", "--kind", "income", "--category", "Food", "--amount",
            "5",
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("not registered"));
    assert_eq!(store::load_transactions(&conn).unwrap().len(), 4);
}

#[test]
fn add_rejects_negative_amount() {
    let conn = setup();
    let mut state = AppState::open(&conn, None).unwrap();
    let res = run_tx(
        &conn,
        &mut state,
        &[
            "add", "--date", "2025-03-04", "--kind", "expense", "--category", "Food",
            "--amount=-5",
        ],
    );
    assert!(res.is_err());
}
