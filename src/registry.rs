// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::i18n::Language;
use crate::models::TransactionKind;
use crate::store;
use anyhow::Result;
use rusqlite::Connection;

/// In-memory mirror of the `categories` table. Additive only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRegistry {
    income: Vec<String>,
    expense: Vec<String>,
}

impl CategoryRegistry {
    /// Loads both lists, seeding a kind with the language's defaults when its
    /// list is empty.
    pub fn load(conn: &Connection, language: Language) -> Result<Self> {
        let mut reg = Self::default();
        for kind in TransactionKind::ALL {
            let mut names = store::list_categories(conn, kind)?;
            if names.is_empty() {
                for name in language.default_categories(kind) {
                    store::add_category(conn, kind, name)?;
                }
                names = store::list_categories(conn, kind)?;
            }
            *reg.list_mut(kind) = names;
        }
        Ok(reg)
    }

    fn list_mut(&mut self, kind: TransactionKind) -> &mut Vec<String> {
        match kind {
            TransactionKind::Income => &mut self.income,
            TransactionKind::Expense => &mut self.expense,
        }
    }

    pub fn names(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expense,
        }
    }

    pub fn contains(&self, kind: TransactionKind, name: &str) -> bool {
        let name = name.trim();
        self.names(kind).iter().any(|n| n == name)
    }

    /// Writes through to the store. Returns `false` for an existing pair.
    pub fn add(&mut self, conn: &Connection, kind: TransactionKind, name: &str) -> Result<bool> {
        let inserted = store::add_category(conn, kind, name)?;
        let name = name.trim();
        if !self.contains(kind, name) {
            self.list_mut(kind).push(name.to_string());
        }
        Ok(inserted)
    }
}
