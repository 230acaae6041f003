// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! JSON backup artifact and its replay.

use crate::error::FinanceError;
use crate::models::{Category, Reminder, SavingGoal, Transaction};
use crate::store;
use anyhow::{Context, Result};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The four entity collections are required; the rest is optional so
/// hand-written or older backups still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub transactions: Vec<Transaction>,
    pub budgets: BTreeMap<String, Decimal>,
    pub reminders: Vec<Reminder>,
    pub saving_goals: Vec<SavingGoal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_balance: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreCounts {
    pub transactions: usize,
    pub budgets: usize,
    pub reminders: usize,
    pub saving_goals: usize,
    pub categories: usize,
}

impl Backup {
    pub fn from_store(conn: &Connection) -> Result<Self> {
        let initial = store::get_initial_balance(conn)?;
        Ok(Self {
            transactions: store::load_transactions(conn)?,
            budgets: store::get_budgets(conn)?,
            reminders: store::get_reminders(conn)?,
            saving_goals: store::get_saving_goals(conn)?,
            initial_balance: (!initial.is_zero()).then_some(initial),
            categories: store::load_categories(conn)?,
        })
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read backup {}", path.display()))?;
        serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Import(format!("{}: {}", path.display(), e)).into())
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write backup {}", path.display()))
    }

    /// Clears the store, then replays every record through the normal add
    /// operations. There is no enclosing SQL transaction: a failure part way
    /// leaves whatever was replayed before it.
    pub fn restore(&self, conn: &Connection) -> Result<RestoreCounts> {
        store::reset_all(conn)?;
        let mut counts = RestoreCounts::default();

        for c in &self.categories {
            if store::add_category(conn, c.kind, &c.name)? {
                counts.categories += 1;
            }
        }
        if let Some(initial) = self.initial_balance {
            store::set_initial_balance(conn, initial)?;
        }
        for (i, t) in self.transactions.iter().enumerate() {
            store::add_transaction(conn, t.date, t.kind, &t.category, t.amount, t.note.as_deref())
                .with_context(|| format!("Replaying transaction #{}", i + 1))?;
            counts.transactions += 1;
        }
        for (category, amount) in &self.budgets {
            store::set_budget(conn, category, *amount)
                .with_context(|| format!("Replaying budget '{}'", category))?;
            counts.budgets += 1;
        }
        for r in &self.reminders {
            store::add_reminder(conn, &r.name, r.due_date, r.amount, &r.category)
                .with_context(|| format!("Replaying reminder '{}'", r.name))?;
            counts.reminders += 1;
        }
        for g in &self.saving_goals {
            store::add_saving_goal(conn, &g.name, g.target_amount, g.target_date)
                .with_context(|| format!("Replaying goal '{}'", g.name))?;
            counts.saving_goals += 1;
        }
        Ok(counts)
    }
}
