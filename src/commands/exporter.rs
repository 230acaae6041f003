// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::backup::Backup;
use crate::error::FinanceError;
use crate::state::AppState;
use crate::store;
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;
use std::path::Path;

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("backup", sub)) => export_backup(conn, state, sub),
        Some(("transactions", sub)) => export_transactions(conn, state, sub),
        _ => Ok(()),
    }
}

fn export_backup(conn: &Connection, state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap().trim();
    Backup::from_store(conn)?.write(Path::new(out))?;
    println!("{}", state.translator.tf("export.done", &[&"backup", &out]));
    Ok(())
}

fn export_transactions(conn: &Connection, state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().trim();

    let mut txs = store::load_transactions(conn)?;
    txs.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "kind", "category", "amount", "note"])?;
            for t in &txs {
                wtr.write_record([
                    t.date.to_string(),
                    t.kind.to_string(),
                    t.category.clone(),
                    t.amount.to_string(),
                    t.note.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = txs
                .iter()
                .map(|t| {
                    json!({
                        "date": t.date, "kind": t.kind, "category": t.category, "amount": t.amount, "note": t.note
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => return Err(FinanceError::UnknownFormat(other.to_string()).into()),
    }
    println!(
        "{}",
        state.translator.tf("export.done", &[&"transactions", &out])
    );
    Ok(())
}
