// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{self, GoalProgress};
use crate::state::AppState;
use crate::store;
use crate::utils::{
    currency_symbol, format_amount, maybe_print_json, parse_date, parse_decimal, pretty_table,
};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let target_date = parse_date(sub.get_one::<String>("target-date").unwrap())?;
            store::add_saving_goal(conn, name, amount, target_date)?;
            let symbol = currency_symbol(conn)?;
            println!(
                "{}",
                state.translator.tf(
                    "goal.added",
                    &[&name, &format_amount(&amount, &symbol), &target_date]
                )
            );
        }
        Some(("list", sub)) => {
            let data = progress(conn)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                print_table(conn, state, &data)?;
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn progress(conn: &Connection) -> Result<Vec<GoalProgress>> {
    let balance = store::get_balance(conn)?;
    let goals = store::get_saving_goals(conn)?;
    Ok(aggregate::goal_progress(balance, &goals))
}

fn print_table(conn: &Connection, state: &AppState, data: &[GoalProgress]) -> Result<()> {
    let symbol = currency_symbol(conn)?;
    let t = &state.translator;
    let rows = data
        .iter()
        .map(|p| {
            vec![
                p.goal.name.clone(),
                format_amount(&p.goal.target_amount, &symbol),
                p.goal.target_date.to_string(),
                p.percent
                    .map(|v| format!("{:.1}%", v))
                    .unwrap_or_else(|| "-".into()),
                if p.achieved {
                    t.t("status.achieved").to_string()
                } else {
                    t.t("status.in_progress").to_string()
                },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                t.t("hdr.name"),
                t.t("hdr.target"),
                t.t("hdr.target_date"),
                t.t("hdr.progress"),
                t.t("hdr.status"),
            ],
            rows,
        )
    );
    if data.len() > 1 {
        println!("{}", t.t("goal.shared_note"));
    }
    Ok(())
}
