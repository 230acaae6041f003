// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Record store: every read and write of persisted entities goes through here.
//!
//! Nothing is cached; each call reads from or writes to the connection it is
//! given. Storage faults propagate to the caller untouched.

use crate::aggregate;
use crate::error::FinanceError;
use crate::models::{Category, Reminder, SavingGoal, Transaction, TransactionKind};
use crate::utils::{delete_setting, get_setting, set_setting};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

const INITIAL_BALANCE_KEY: &str = "initial_balance";

fn parse_stored_decimal(s: &str, what: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid {} '{}' in database", what, s))
}

fn ensure_non_negative(amount: Decimal, field: &str) -> Result<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(FinanceError::negative_amount(field).into());
    }
    Ok(())
}

fn ensure_named(name: &str, field: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(FinanceError::empty_name(field).into());
    }
    Ok(())
}

/// Appends a transaction and returns its id. The category is not checked
/// against the registry here.
pub fn add_transaction(
    conn: &Connection,
    date: NaiveDate,
    kind: TransactionKind,
    category: &str,
    amount: Decimal,
    note: Option<&str>,
) -> Result<i64> {
    ensure_non_negative(amount, "Amount")?;
    let note = note.map(str::trim).filter(|n| !n.is_empty());
    conn.execute(
        "INSERT INTO transactions(date, kind, category, amount, note) VALUES (?1,?2,?3,?4,?5)",
        params![date, kind, category.trim(), amount.to_string(), note],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Rows come back in storage order; callers sort for display.
pub fn load_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt =
        conn.prepare("SELECT id, date, kind, category, amount, note FROM transactions ORDER BY id")?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let amount: String = r.get(4)?;
        data.push(Transaction {
            id: r.get(0)?,
            date: r.get(1)?,
            kind: r.get(2)?,
            category: r.get(3)?,
            amount: parse_stored_decimal(&amount, "transaction amount")?,
            note: r.get(5)?,
        });
    }
    Ok(data)
}

pub fn set_initial_balance(conn: &Connection, amount: Decimal) -> Result<()> {
    ensure_non_negative(amount, "Initial balance")?;
    set_setting(conn, INITIAL_BALANCE_KEY, &amount.to_string())
}

pub fn get_initial_balance(conn: &Connection) -> Result<Decimal> {
    match get_setting(conn, INITIAL_BALANCE_KEY)? {
        Some(s) => parse_stored_decimal(&s, "initial balance"),
        None => Ok(Decimal::ZERO),
    }
}

pub fn get_balance(conn: &Connection) -> Result<Decimal> {
    let initial = get_initial_balance(conn)?;
    let txs = load_transactions(conn)?;
    Ok(aggregate::balance(initial, &txs)?)
}

pub fn get_category_summary(conn: &Connection) -> Result<BTreeMap<String, Decimal>> {
    let txs = load_transactions(conn)?;
    Ok(aggregate::category_summary(&txs)?)
}

/// Returns `false` when the pair already exists; a duplicate is not an error.
pub fn add_category(conn: &Connection, kind: TransactionKind, name: &str) -> Result<bool> {
    let name = name.trim();
    ensure_named(name, "Category name")?;
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO categories(kind, name) VALUES (?1, ?2)",
        params![kind, name],
    )?;
    Ok(inserted > 0)
}

pub fn list_categories(conn: &Connection, kind: TransactionKind) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM categories WHERE kind=?1 ORDER BY id")?;
    let rows = stmt.query_map(params![kind], |r| r.get::<_, String>(0))?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

pub fn load_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, kind, name FROM categories ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok(Category {
            id: r.get(0)?,
            kind: r.get(1)?,
            name: r.get(2)?,
        })
    })?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

pub fn set_budget(conn: &Connection, category: &str, amount: Decimal) -> Result<()> {
    let category = category.trim();
    ensure_named(category, "Budget category")?;
    ensure_non_negative(amount, "Budget amount")?;
    conn.execute(
        "INSERT INTO budgets(category, amount) VALUES (?1, ?2)
         ON CONFLICT(category) DO UPDATE SET amount=excluded.amount",
        params![category, amount.to_string()],
    )?;
    Ok(())
}

pub fn get_budgets(conn: &Connection) -> Result<BTreeMap<String, Decimal>> {
    let mut stmt = conn.prepare("SELECT category, amount FROM budgets")?;
    let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?)))?;
    let mut data = BTreeMap::new();
    for row in rows {
        let (cat, amt) = row?;
        let amount = parse_stored_decimal(&amt, "budget amount")?;
        data.insert(cat, amount);
    }
    Ok(data)
}

pub fn add_reminder(
    conn: &Connection,
    name: &str,
    due_date: NaiveDate,
    amount: Decimal,
    category: &str,
) -> Result<i64> {
    ensure_named(name, "Reminder name")?;
    ensure_non_negative(amount, "Reminder amount")?;
    conn.execute(
        "INSERT INTO reminders(name, due_date, amount, category) VALUES (?1,?2,?3,?4)",
        params![name.trim(), due_date, amount.to_string(), category.trim()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_reminders(conn: &Connection) -> Result<Vec<Reminder>> {
    let mut stmt =
        conn.prepare("SELECT id, name, due_date, amount, category FROM reminders ORDER BY id")?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let amount: String = r.get(3)?;
        data.push(Reminder {
            id: r.get(0)?,
            name: r.get(1)?,
            due_date: r.get(2)?,
            amount: parse_stored_decimal(&amount, "reminder amount")?,
            category: r.get(4)?,
        });
    }
    Ok(data)
}

pub fn add_saving_goal(
    conn: &Connection,
    name: &str,
    target_amount: Decimal,
    target_date: NaiveDate,
) -> Result<i64> {
    ensure_named(name, "Goal name")?;
    ensure_non_negative(target_amount, "Goal amount")?;
    conn.execute(
        "INSERT INTO saving_goals(name, target_amount, target_date) VALUES (?1,?2,?3)",
        params![name.trim(), target_amount.to_string(), target_date],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_saving_goals(conn: &Connection) -> Result<Vec<SavingGoal>> {
    let mut stmt = conn
        .prepare("SELECT id, name, target_amount, target_date FROM saving_goals ORDER BY id")?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let amount: String = r.get(2)?;
        data.push(SavingGoal {
            id: r.get(0)?,
            name: r.get(1)?,
            target_amount: parse_stored_decimal(&amount, "goal amount")?,
            target_date: r.get(3)?,
        });
    }
    Ok(data)
}

/// Clears every entity table and the initial balance. Preferences stored in
/// `settings` (language, currency symbol, password) are left alone.
pub fn reset_all(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DELETE FROM transactions;
        DELETE FROM budgets;
        DELETE FROM reminders;
        DELETE FROM saving_goals;
        DELETE FROM categories;
        "#,
    )?;
    delete_setting(conn, INITIAL_BALANCE_KEY)?;
    Ok(())
}
