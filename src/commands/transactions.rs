// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::FinanceError;
use crate::models::TransactionKind;
use crate::state::AppState;
use crate::store;
use crate::utils::{
    currency_symbol, format_amount, maybe_print_json, parse_date, parse_decimal, parse_month,
    pretty_table,
};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, state, sub)?,
        Some(("list", sub)) => list(conn, state, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let kind: TransactionKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let category = sub.get_one::<String>("category").unwrap().trim();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let note = sub.get_one::<String>("note").map(|s| s.as_str());

    // The store accepts any pairing; only offer what the registry knows.
    if !state.registry.contains(kind, category) {
        return Err(FinanceError::UnknownCategory {
            kind: kind.to_string(),
            name: category.to_string(),
        }
        .into());
    }

    store::add_transaction(conn, date, kind, category, amount, note)?;
    let t = &state.translator;
    println!(
        "{}",
        t.tf(
            "tx.added",
            &[
                &t.kind(kind),
                &format_amount(&amount, &currency_symbol(conn)?),
                &category,
                &date
            ]
        )
    );
    Ok(())
}

fn list(conn: &Connection, state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    let t = &state.translator;
    if data.is_empty() {
        println!("{}", t.t("tx.none"));
        return Ok(());
    }
    let symbol = currency_symbol(conn)?;
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|r| {
            let amount = r
                .amount
                .parse()
                .map(|d| format_amount(&d, &symbol))
                .unwrap_or_else(|_| r.amount.clone());
            let kind = r
                .kind
                .parse::<TransactionKind>()
                .map(|k| t.kind(k).to_string())
                .unwrap_or_else(|_| r.kind.clone());
            vec![r.date.clone(), kind, r.category.clone(), amount, r.note.clone()]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                t.t("hdr.date"),
                t.t("hdr.kind"),
                t.t("hdr.category"),
                t.t("hdr.amount"),
                t.t("hdr.note"),
            ],
            rows,
        )
    );
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

/// Filtered listing, newest first. The store itself keeps insertion order.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT id, date, kind, category, amount, note FROM transactions WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(kind) = sub.get_one::<String>("kind") {
        let kind: TransactionKind = kind.parse()?;
        sql.push_str(" AND kind=?");
        params_vec.push(kind.as_str().into());
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        sql.push_str(" AND category=?");
        params_vec.push(cat.trim().into());
    }
    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(date,1,7)=?");
        params_vec.push(parse_month(month)?);
    }
    sql.push_str(" ORDER BY date DESC, id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(&format!(" LIMIT {}", limit));
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(rusqlite::params_from_iter(params_vec.iter()))?;

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let note: Option<String> = r.get(5)?;
        data.push(TransactionRow {
            id: r.get(0)?,
            date: r.get(1)?,
            kind: r.get(2)?,
            category: r.get(3)?,
            amount: r.get(4)?,
            note: note.unwrap_or_default(),
        });
    }
    Ok(data)
}
