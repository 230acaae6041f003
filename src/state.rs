// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-invocation application state handed to every command handler.

use crate::auth;
use crate::i18n::{Language, Translator};
use crate::registry::CategoryRegistry;
use crate::utils::get_setting;
use anyhow::Result;
use rusqlite::Connection;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructiveAction {
    ResetAll,
    ImportBackup,
}

impl DestructiveAction {
    fn prompt_key(&self) -> &'static str {
        match self {
            Self::ResetAll => "reset.prompt",
            Self::ImportBackup => "import.prompt",
        }
    }
}

/// Idle -> PendingConfirm(action) -> Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Confirmation {
    #[default]
    Idle,
    PendingConfirm(DestructiveAction),
}

impl Confirmation {
    pub fn request(&mut self, action: DestructiveAction) {
        *self = Self::PendingConfirm(action);
    }

    /// True only if `action` is the one pending. Always returns to Idle.
    pub fn confirm(&mut self, action: DestructiveAction) -> bool {
        let approved = *self == Self::PendingConfirm(action);
        *self = Self::Idle;
        approved
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::PendingConfirm(_))
    }
}

/// Only constructible through [`AppState::open`], which runs the password
/// check first; holding one means the gate was passed.
#[derive(Debug)]
pub struct AppState {
    pub translator: Translator,
    pub registry: CategoryRegistry,
    pub confirmation: Confirmation,
}

pub fn configured_language(conn: &Connection) -> Result<Language> {
    match get_setting(conn, "language")? {
        Some(code) => Ok(code.parse()?),
        None => Ok(Language::default()),
    }
}

impl AppState {
    pub fn open(conn: &Connection, password: Option<&str>) -> Result<Self> {
        auth::check(conn, password)?;
        let language = configured_language(conn)?;
        Ok(Self {
            translator: Translator::new(language),
            registry: CategoryRegistry::load(conn, language)?,
            confirmation: Confirmation::Idle,
        })
    }

    /// Re-reads the registry, seeding defaults again if a reset emptied it.
    pub fn reload_registry(&mut self, conn: &Connection) -> Result<()> {
        self.registry = CategoryRegistry::load(conn, self.translator.language())?;
        Ok(())
    }

    /// Two-step confirmation for `action`. With `assume_yes` the prompt is
    /// skipped; otherwise a line is read from `input` and must say yes.
    pub fn confirm_destructive<R: BufRead>(
        &mut self,
        action: DestructiveAction,
        assume_yes: bool,
        mut input: R,
    ) -> Result<bool> {
        self.confirmation.request(action);
        if assume_yes {
            return Ok(self.confirmation.confirm(action));
        }

        print!("{} ", self.translator.t(action.prompt_key()));
        std::io::stdout().flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(self.confirmation.confirm(action)),
            _ => {
                self.confirmation.cancel();
                Ok(false)
            }
        }
    }
}
