// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::state::AppState;
use crate::store;
use crate::utils::{currency_symbol, format_amount, maybe_print_json, parse_decimal};
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    let t = &state.translator;
    match m.subcommand() {
        Some(("show", sub)) => {
            let balance = store::get_balance(conn)?;
            let initial = store::get_initial_balance(conn)?;
            let v = json!({ "balance": balance, "initial_balance": initial });
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &v)? {
                let symbol = currency_symbol(conn)?;
                println!(
                    "{}",
                    t.tf("balance.current", &[&format_amount(&balance, &symbol)])
                );
            }
        }
        Some(("set-initial", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            store::set_initial_balance(conn, amount)?;
            let symbol = currency_symbol(conn)?;
            println!(
                "{}",
                t.tf("balance.initial_set", &[&format_amount(&amount, &symbol)])
            );
        }
        _ => {}
    }
    Ok(())
}
