// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionKind;
use crate::state::AppState;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let kind: TransactionKind = sub.get_one::<String>("kind").unwrap().parse()?;
            let name = sub.get_one::<String>("name").unwrap().trim();
            let inserted = state.registry.add(conn, kind, name)?;
            let t = &state.translator;
            let key = if inserted {
                "category.added"
            } else {
                "category.exists"
            };
            println!("{}", t.tf(key, &[&t.kind(kind), &name]));
        }
        Some(("list", sub)) => {
            let kinds: Vec<TransactionKind> = match sub.get_one::<String>("kind") {
                Some(k) => vec![k.parse()?],
                None => TransactionKind::ALL.to_vec(),
            };
            let mut items = Vec::new();
            for kind in kinds {
                for name in state.registry.names(kind) {
                    items.push((kind, name.clone()));
                }
            }
            let as_json: Vec<_> = items
                .iter()
                .map(|(k, n)| json!({ "kind": k, "name": n }))
                .collect();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &as_json)? {
                let t = &state.translator;
                let data = items
                    .into_iter()
                    .map(|(k, n)| vec![t.kind(k).to_string(), n])
                    .collect();
                println!(
                    "{}",
                    pretty_table(&[t.t("hdr.kind"), t.t("hdr.category")], data)
                );
            }
        }
        _ => {}
    }
    Ok(())
}
