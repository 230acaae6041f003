// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Single shared-secret gate. There are no users or roles: either a password
//! hash is stored and must be matched, or the data is open.

use crate::error::FinanceError;
use crate::utils::{delete_setting, get_setting, set_setting};
use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use rusqlite::Connection;

const PASSWORD_KEY: &str = "password_hash";

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Password hashing failed: {}", e))?;
    Ok(hash.to_string())
}

pub fn verify_password(stored_hash: &str, password: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| anyhow!("Stored password hash is invalid: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub fn is_protected(conn: &Connection) -> Result<bool> {
    Ok(get_setting(conn, PASSWORD_KEY)?.is_some())
}

pub fn set_password(conn: &Connection, password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(FinanceError::empty_name("Password").into());
    }
    set_setting(conn, PASSWORD_KEY, &hash_password(password)?)
}

pub fn clear_password(conn: &Connection) -> Result<()> {
    delete_setting(conn, PASSWORD_KEY)
}

/// Passes when no password is configured, or when `password` matches.
pub fn check(conn: &Connection, password: Option<&str>) -> Result<()> {
    let Some(stored) = get_setting(conn, PASSWORD_KEY)? else {
        return Ok(());
    };
    match password {
        Some(pw) if verify_password(&stored, pw)? => Ok(()),
        _ => Err(FinanceError::AuthFailed.into()),
    }
}
