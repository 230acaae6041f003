// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::state::{AppState, DestructiveAction};
use crate::store;
use anyhow::Result;
use rusqlite::Connection;
use std::io::BufRead;

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    run(conn, state, m.get_flag("yes"), std::io::stdin().lock())?;
    Ok(())
}

/// Returns whether the data was actually cleared.
pub fn run<R: BufRead>(
    conn: &Connection,
    state: &mut AppState,
    assume_yes: bool,
    input: R,
) -> Result<bool> {
    if !state.confirm_destructive(DestructiveAction::ResetAll, assume_yes, input)? {
        println!("{}", state.translator.t("action.cancelled"));
        return Ok(false);
    }
    store::reset_all(conn)?;
    state.reload_registry(conn)?;
    println!("{}", state.translator.t("reset.done"));
    Ok(true)
}
