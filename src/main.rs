// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use fintrack::{auth, cli, commands, db, state::AppState};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut conn = db::open_or_init()?;

    // Nothing past this point runs unless the password check passed.
    let password = match matches.get_one::<String>("password") {
        Some(pw) => Some(pw.clone()),
        None if auth::is_protected(&conn)? => Some(rpassword::prompt_password("Password: ")?),
        None => None,
    };
    let mut state = AppState::open(&conn, password.as_deref())?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!(
                "{}",
                state
                    .translator
                    .tf("init.done", &[&db::db_path()?.display()])
            );
        }
        Some(("balance", sub)) => commands::balance::handle(&conn, &mut state, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&conn, &mut state, sub)?,
        Some(("category", sub)) => commands::categories::handle(&conn, &mut state, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&conn, &mut state, sub)?,
        Some(("reminder", sub)) => commands::reminders::handle(&conn, &mut state, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&conn, &mut state, sub)?,
        Some(("report", sub)) => commands::reports::handle(&conn, &mut state, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, &mut state, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut conn, &mut state, sub)?,
        Some(("reset", sub)) => commands::reset::handle(&conn, &mut state, sub)?,
        Some(("config", sub)) => commands::settings::handle(&conn, &mut state, sub)?,
        Some(("auth", sub)) => commands::security::handle(&conn, &mut state, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn, &state)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
