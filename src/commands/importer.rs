// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::backup::{Backup, RestoreCounts};
use crate::models::TransactionKind;
use crate::state::{AppState, DestructiveAction};
use crate::store;
use crate::utils::{parse_date, parse_decimal};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use rusqlite::Connection;
use std::io::BufRead;
use std::path::Path;

pub fn handle(conn: &mut Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("backup", sub)) => import_backup(conn, state, sub),
        Some(("transactions", sub)) => import_transactions(conn, state, sub),
        _ => Ok(()),
    }
}

fn import_backup(conn: &Connection, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    run_backup(
        conn,
        state,
        Path::new(path),
        sub.get_flag("yes"),
        std::io::stdin().lock(),
    )?;
    Ok(())
}

/// Replaces all data with the backup at `path`. Returns `None` when the
/// confirmation was declined, in which case nothing is touched.
pub fn run_backup<R: BufRead>(
    conn: &Connection,
    state: &mut AppState,
    path: &Path,
    assume_yes: bool,
    input: R,
) -> Result<Option<RestoreCounts>> {
    // Parse before anything is cleared.
    let backup = Backup::read(path)?;

    if !state.confirm_destructive(DestructiveAction::ImportBackup, assume_yes, input)? {
        println!("{}", state.translator.t("action.cancelled"));
        return Ok(None);
    }

    let counts = backup.restore(conn)?;
    state.reload_registry(conn)?;
    println!(
        "{}",
        state.translator.tf(
            "import.done",
            &[
                &path.display(),
                &counts.transactions,
                &counts.budgets,
                &counts.reminders,
                &counts.saving_goals,
            ]
        )
    );
    Ok(Some(counts))
}

/// Appends rows of `date,kind,category,amount,note` inside one SQL
/// transaction. Categories are registered for their kind as they appear.
fn import_transactions(
    conn: &mut Connection,
    state: &mut AppState,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let tx = conn.transaction()?;
    let mut imported = 0usize;
    for (line, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = line + 2;
        let date_raw = rec.get(0).context("date missing")?.trim();
        let kind_raw = rec.get(1).context("kind missing")?.trim();
        let category = rec.get(2).context("category missing")?.trim();
        let amount_raw = rec.get(3).context("amount missing")?.trim();
        let note = rec.get(4).map(|s| s.trim()).filter(|s| !s.is_empty());

        let date = parse_date(date_raw).with_context(|| format!("Row {}", row))?;
        let kind: TransactionKind = kind_raw
            .parse()
            .with_context(|| format!("Row {}", row))?;
        let amount = parse_decimal(amount_raw)
            .with_context(|| format!("Invalid amount '{}' on row {}", amount_raw, row))?;

        store::add_category(&tx, kind, category)?;
        store::add_transaction(&tx, date, kind, category, amount, note)
            .with_context(|| format!("Row {}", row))?;
        imported += 1;
    }
    tx.commit()?;
    state.reload_registry(conn)?;
    println!(
        "{}",
        state.translator.tf("import.csv_done", &[&imported, &path])
    );
    Ok(())
}
