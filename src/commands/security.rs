// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth;
use crate::error::FinanceError;
use crate::state::AppState;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    let t = &state.translator;
    match m.subcommand() {
        Some(("set-password", sub)) => {
            let new = match sub.get_one::<String>("new") {
                Some(pw) => pw.clone(),
                None => {
                    let first = rpassword::prompt_password(t.t("auth.prompt"))?;
                    let second = rpassword::prompt_password(t.t("auth.confirm_prompt"))?;
                    if first != second {
                        return Err(FinanceError::Validation(t.t("auth.mismatch").into()).into());
                    }
                    first
                }
            };
            auth::set_password(conn, &new)?;
            println!("{}", t.t("auth.password_set"));
        }
        Some(("clear-password", _)) => {
            auth::clear_password(conn)?;
            println!("{}", t.t("auth.password_cleared"));
        }
        _ => {}
    }
    Ok(())
}
