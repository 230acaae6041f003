// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{self, BudgetProgress};
use crate::state::AppState;
use crate::store;
use crate::utils::{currency_symbol, format_amount, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, state, sub)?,
        Some(("list", sub)) => list(conn, state, sub)?,
        Some(("status", sub)) => status(conn, state, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let cat = sub.get_one::<String>("category").unwrap().trim();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    store::set_budget(conn, cat, amount)?;
    let symbol = currency_symbol(conn)?;
    println!(
        "{}",
        state
            .translator
            .tf("budget.set", &[&cat, &format_amount(&amount, &symbol)])
    );
    Ok(())
}

fn list(conn: &Connection, state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let budgets = store::get_budgets(conn)?;
    let as_json: Vec<_> = budgets
        .iter()
        .map(|(c, a)| json!({ "category": c, "amount": a }))
        .collect();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &as_json)? {
        return Ok(());
    }
    let symbol = currency_symbol(conn)?;
    let t = &state.translator;
    let data = budgets
        .iter()
        .map(|(c, a)| vec![c.clone(), format_amount(a, &symbol)])
        .collect();
    println!(
        "{}",
        pretty_table(&[t.t("hdr.category"), t.t("hdr.budget")], data)
    );
    Ok(())
}

/// Budgets joined with the all-time expense summary.
pub fn progress(conn: &Connection) -> Result<Vec<BudgetProgress>> {
    let budgets = store::get_budgets(conn)?;
    let summary = store::get_category_summary(conn)?;
    Ok(aggregate::budget_progress(&budgets, &summary))
}

fn status(conn: &Connection, state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let data = progress(conn)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let symbol = currency_symbol(conn)?;
    let t = &state.translator;
    let rows = data
        .iter()
        .map(|p| {
            vec![
                p.category.clone(),
                format_amount(&p.limit, &symbol),
                format_amount(&p.spent, &symbol),
                p.percent
                    .map(|v| format!("{:.1}%", v))
                    .unwrap_or_else(|| "-".into()),
                if p.exceeded {
                    t.t("status.exceeded").to_string()
                } else {
                    t.t("status.ok").to_string()
                },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                t.t("hdr.category"),
                t.t("hdr.budget"),
                t.t("hdr.spent"),
                t.t("hdr.progress"),
                t.t("hdr.status"),
            ],
            rows,
        )
    );
    Ok(())
}
