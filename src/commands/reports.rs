// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{self, Period};
use crate::error::FinanceError;
use crate::state::AppState;
use crate::store;
use crate::utils::{currency_symbol, format_amount, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, state, sub)?,
        Some(("trend", sub)) => trend(conn, state, sub)?,
        Some(("overview", sub)) => overview(conn, state, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    pub share: Decimal,
}

/// Category summary with each category's percentage of total expense,
/// largest first.
pub fn category_shares(conn: &Connection) -> Result<Vec<CategoryShare>> {
    let summary = store::get_category_summary(conn)?;
    let total = summary
        .values()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
        .ok_or_else(|| FinanceError::Overflow("total expense".into()))?;
    let mut items: Vec<CategoryShare> = summary
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            share: if total.is_zero() {
                Decimal::ZERO
            } else {
                (amount / total * Decimal::ONE_HUNDRED).round_dp(2)
            },
            category,
            amount,
        })
        .collect();
    items.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.category.cmp(&b.category)));
    Ok(items)
}

fn summary(conn: &Connection, state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let items = category_shares(conn)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
        return Ok(());
    }
    let t = &state.translator;
    if items.is_empty() {
        println!("{}", t.t("report.no_data"));
        return Ok(());
    }
    let symbol = currency_symbol(conn)?;
    let data = items
        .iter()
        .map(|s| {
            vec![
                s.category.clone(),
                format_amount(&s.amount, &symbol),
                format!("{:.2}%", s.share),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[t.t("hdr.category"), t.t("hdr.spent"), t.t("hdr.share")],
            data
        )
    );
    Ok(())
}

fn trend(conn: &Connection, state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let period = sub.get_one::<String>("period").unwrap();
    let txs = store::load_transactions(conn)?;
    let symbol = currency_symbol(conn)?;
    let t = &state.translator;

    if period == "day" {
        let series = aggregate::daily_expense_trend(&txs)?;
        if maybe_print_json(json_flag, jsonl_flag, &series)? {
            return Ok(());
        }
        if series.is_empty() {
            println!("{}", t.t("report.no_data"));
            return Ok(());
        }
        let data = series
            .iter()
            .map(|d| vec![d.date.to_string(), format_amount(&d.amount, &symbol)])
            .collect();
        println!(
            "{}",
            pretty_table(&[t.t("hdr.date"), t.t("hdr.expense")], data)
        );
        return Ok(());
    }

    let period: Period = period.parse()?;
    let series = aggregate::period_trend(&txs, period)?;
    if maybe_print_json(json_flag, jsonl_flag, &series)? {
        return Ok(());
    }
    if series.is_empty() {
        println!("{}", t.t("report.no_data"));
        return Ok(());
    }
    let data = series
        .iter()
        .map(|p| {
            vec![
                p.bucket.clone(),
                format_amount(&p.income, &symbol),
                format_amount(&p.expense, &symbol),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[t.t("hdr.period"), t.t("hdr.income"), t.t("hdr.expense")],
            data
        )
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub initial_balance: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub transactions: usize,
}

pub fn overview_data(conn: &Connection) -> Result<Overview> {
    let initial = store::get_initial_balance(conn)?;
    let txs = store::load_transactions(conn)?;
    let (income, expense) = aggregate::totals(&txs)?;
    Ok(Overview {
        initial_balance: initial,
        total_income: income,
        total_expense: expense,
        balance: aggregate::balance(initial, &txs)?,
        transactions: txs.len(),
    })
}

fn overview(conn: &Connection, state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let o = overview_data(conn)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &o)? {
        return Ok(());
    }
    let symbol = currency_symbol(conn)?;
    let t = &state.translator;
    let data = vec![
        vec![
            t.t("overview.initial").to_string(),
            format_amount(&o.initial_balance, &symbol),
        ],
        vec![
            t.t("overview.income").to_string(),
            format_amount(&o.total_income, &symbol),
        ],
        vec![
            t.t("overview.expense").to_string(),
            format_amount(&o.total_expense, &symbol),
        ],
        vec![
            t.t("overview.balance").to_string(),
            format_amount(&o.balance, &symbol),
        ],
        vec![t.t("overview.count").to_string(), o.transactions.to_string()],
    ];
    println!("{}", pretty_table(&["", ""], data));
    Ok(())
}
