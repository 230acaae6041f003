// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth;
use crate::db;
use crate::i18n::{Language, Translator};
use crate::state::AppState;
use crate::utils::{currency_symbol, pretty_table, set_setting};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let t = &state.translator;
            let path = db::db_path()?.display().to_string();
            let rows = vec![
                vec!["language".to_string(), t.language().to_string()],
                vec!["currency_symbol".to_string(), currency_symbol(conn)?],
                vec![
                    "password".to_string(),
                    if auth::is_protected(conn)? { "set" } else { "none" }.to_string(),
                ],
                vec!["database".to_string(), path],
            ];
            println!(
                "{}",
                pretty_table(&[t.t("hdr.setting"), t.t("hdr.value")], rows)
            );
        }
        Some(("set-language", sub)) => {
            let lang: Language = sub.get_one::<String>("language").unwrap().parse()?;
            set_setting(conn, "language", lang.code())?;
            state.translator = Translator::new(lang);
            println!("{}", state.translator.tf("config.language_set", &[&lang]));
        }
        Some(("set-currency", sub)) => {
            let symbol = sub.get_one::<String>("symbol").unwrap().trim();
            set_setting(conn, "currency_symbol", symbol)?;
            println!("{}", state.translator.tf("config.currency_set", &[&symbol]));
        }
        _ => {}
    }
    Ok(())
}
