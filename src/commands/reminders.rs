// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{self, ReminderStatus};
use crate::models::Reminder;
use crate::state::AppState;
use crate::store;
use crate::utils::{
    currency_symbol, format_amount, maybe_print_json, parse_date, parse_decimal, pretty_table,
};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            let due = parse_date(sub.get_one::<String>("due").unwrap())?;
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let category = sub.get_one::<String>("category").unwrap();
            store::add_reminder(conn, name, due, amount, category)?;
            println!("{}", state.translator.tf("reminder.added", &[&name, &due]));
        }
        Some(("list", sub)) => {
            let today = chrono::Local::now().date_naive();
            let data = rows_with_status(conn, today)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                print_table(conn, state, &data)?;
            }
        }
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ReminderRow {
    #[serde(flatten)]
    pub reminder: Reminder,
    pub status: ReminderStatus,
}

/// Reminders ordered by due date, each with its status relative to `today`.
pub fn rows_with_status(conn: &Connection, today: NaiveDate) -> Result<Vec<ReminderRow>> {
    let mut reminders = store::get_reminders(conn)?;
    reminders.sort_by(|a, b| a.due_date.cmp(&b.due_date).then(a.id.cmp(&b.id)));
    Ok(reminders
        .into_iter()
        .map(|r| {
            let status = aggregate::reminder_status(&r, today);
            ReminderRow {
                reminder: r,
                status,
            }
        })
        .collect())
}

fn print_table(conn: &Connection, state: &AppState, data: &[ReminderRow]) -> Result<()> {
    let symbol = currency_symbol(conn)?;
    let t = &state.translator;
    let rows = data
        .iter()
        .map(|row| {
            let r = &row.reminder;
            let status = match row.status {
                ReminderStatus::Overdue(d) => t.tf("status.overdue", &[&d]),
                ReminderStatus::DueToday => t.t("status.due_today").to_string(),
                ReminderStatus::Upcoming(d) => t.tf("status.upcoming", &[&d]),
            };
            vec![
                r.name.clone(),
                r.due_date.to_string(),
                format_amount(&r.amount, &symbol),
                r.category.clone(),
                status,
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                t.t("hdr.name"),
                t.t("hdr.due"),
                t.t("hdr.amount"),
                t.t("hdr.category"),
                t.t("hdr.status"),
            ],
            rows,
        )
    );
    Ok(())
}
