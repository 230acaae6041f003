// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

const KINDS: [&str; 2] = ["income", "expense"];

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn required(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).required(true).help(help)
}

fn kind_arg(required: bool) -> Arg {
    Arg::new("kind")
        .long("kind")
        .required(required)
        .value_parser(KINDS)
        .help("income | expense")
}

fn yes_flag() -> Arg {
    Arg::new("yes")
        .long("yes")
        .short('y')
        .action(ArgAction::SetTrue)
        .help("Skip the confirmation prompt")
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .version(crate_version!())
        .about("Personal finance tracker: transactions, budgets, reminders and savings goals")
        .arg(
            Arg::new("password")
                .long("password")
                .env("FINTRACK_PASSWORD")
                .hide_env_values(true)
                .global(true)
                .help("Password, when one has been set with `auth set-password`"),
        )
        .subcommand(Command::new("init").about("Create the database and seed default categories"))
        .subcommand(
            Command::new("balance")
                .about("Current and initial balance")
                .subcommand(json_flags(Command::new("show").about("Show the current balance")))
                .subcommand(
                    Command::new("set-initial")
                        .about("Replace the initial balance")
                        .arg(required("amount", "Funds held before tracking started")),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Income and expense transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(required("date", "YYYY-MM-DD"))
                        .arg(kind_arg(true))
                        .arg(required("category", "Registered category for the kind"))
                        .arg(required("amount", "Non-negative amount"))
                        .arg(Arg::new("note").long("note").help("Free text")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(kind_arg(false))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Income and expense categories")
                .subcommand(
                    Command::new("add")
                        .about("Register a category (duplicates are ignored)")
                        .arg(kind_arg(true))
                        .arg(required("name", "Category name")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List categories").arg(kind_arg(false)),
                )),
        )
        .subcommand(
            Command::new("budget")
                .about("Spending limits per category")
                .subcommand(
                    Command::new("set")
                        .about("Set or replace a category budget")
                        .arg(required("category", "Expense category"))
                        .arg(required("amount", "Limit")),
                )
                .subcommand(json_flags(Command::new("list").about("List budgets")))
                .subcommand(json_flags(
                    Command::new("status").about("Spending against each budget"),
                )),
        )
        .subcommand(
            Command::new("reminder")
                .about("Payment reminders")
                .subcommand(
                    Command::new("add")
                        .about("Add a reminder")
                        .arg(required("name", "What to pay"))
                        .arg(required("due", "Due date YYYY-MM-DD"))
                        .arg(required("amount", "Amount"))
                        .arg(required("category", "Category")),
                )
                .subcommand(json_flags(Command::new("list").about("List reminders"))),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Add a savings goal")
                        .arg(required("name", "Goal name"))
                        .arg(required("amount", "Target amount"))
                        .arg(required("target-date", "YYYY-MM-DD")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List goals with progress"),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views")
                .subcommand(json_flags(
                    Command::new("summary").about("Expense total per category"),
                ))
                .subcommand(json_flags(
                    Command::new("trend").about("Spending over time").arg(
                        Arg::new("period")
                            .long("period")
                            .value_parser(["day", "month", "quarter", "year"])
                            .default_value("day"),
                    ),
                ))
                .subcommand(json_flags(
                    Command::new("overview").about("Balance and totals"),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Write data to a file")
                .subcommand(
                    Command::new("backup")
                        .about("Full JSON backup")
                        .arg(required("out", "Output path")),
                )
                .subcommand(
                    Command::new("transactions")
                        .about("Flat transaction export")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv | json"),
                        )
                        .arg(required("out", "Output path")),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Read data from a file")
                .subcommand(
                    Command::new("backup")
                        .about("Replace ALL data with a JSON backup")
                        .arg(required("path", "Backup file"))
                        .arg(yes_flag()),
                )
                .subcommand(
                    Command::new("transactions")
                        .about("Append transactions from CSV")
                        .arg(required("path", "CSV with date,kind,category,amount,note")),
                ),
        )
        .subcommand(
            Command::new("reset")
                .about("Delete ALL data")
                .arg(yes_flag()),
        )
        .subcommand(
            Command::new("config")
                .about("Preferences")
                .subcommand(Command::new("show").about("Show preferences"))
                .subcommand(
                    Command::new("set-language")
                        .about("Display language")
                        .arg(
                            Arg::new("language")
                                .required(true)
                                .value_parser(["en", "vi"]),
                        ),
                )
                .subcommand(
                    Command::new("set-currency")
                        .about("Currency symbol shown after amounts")
                        .arg(Arg::new("symbol").required(true)),
                ),
        )
        .subcommand(
            Command::new("auth")
                .about("Shared password")
                .subcommand(
                    Command::new("set-password")
                        .about("Set or replace the password")
                        .arg(
                            Arg::new("new")
                                .long("new")
                                .help("New password; prompted for when omitted"),
                        ),
                )
                .subcommand(Command::new("clear-password").about("Remove the password")),
        )
        .subcommand(Command::new("doctor").about("Report data inconsistencies"))
}
