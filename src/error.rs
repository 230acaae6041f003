// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed errors raised by the record store and the session layer.
//!
//! Command handlers work in `anyhow::Result` and attach context; these variants
//! are what they wrap when the failure is a domain rule rather than an I/O fault.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinanceError {
    /// Input rejected by the store (negative amount, empty name, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid transaction kind '{0}' (use income|expense)")]
    InvalidKind(String),

    #[error("Invalid period '{0}' (use day|month|quarter|year)")]
    InvalidPeriod(String),

    #[error("Unsupported language '{0}' (use en|vi)")]
    UnsupportedLanguage(String),

    #[error("Category '{name}' is not registered for {kind}")]
    UnknownCategory { kind: String, name: String },

    #[error("Unknown format: {0} (use csv|json)")]
    UnknownFormat(String),

    #[error("Authentication failed")]
    AuthFailed,

    #[error("Import error: {0}")]
    Import(String),

    #[error("Amount overflow while computing {0}")]
    Overflow(String),
}

impl FinanceError {
    pub fn negative_amount(field: &str) -> Self {
        Self::Validation(format!("{} must not be negative", field))
    }

    pub fn empty_name(field: &str) -> Self {
        Self::Validation(format!("{} must not be empty", field))
    }
}

pub type FinanceResult<T> = Result<T, FinanceError>;
