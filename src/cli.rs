// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("acetrack")
        .version(crate_version!())
        .about("Poker bankroll tracker: accounts, session settlement, transfers, analytics")
        .subcommand(Command::new("init").about("Show where the ledger file lives"))
        .subcommand(
            Command::new("account")
                .about("Manage bankroll accounts")
                .subcommand(
                    Command::new("add")
                        .about("Create an account (balance starts at 0)")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("Site|Wallet|Cash"),
                        )
                        .arg(Arg::new("icon").long("icon").default_value("♠️")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List accounts with balances"),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Edit account fields; --balance bypasses the transaction log")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("type").long("type").help("Site|Wallet|Cash"))
                        .arg(Arg::new("icon").long("icon"))
                        .arg(Arg::new("balance").long("balance"))
                        .arg(Arg::new("color").long("color")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an account and its entire history")
                        .arg(Arg::new("id").required(true))
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .action(ArgAction::SetTrue)
                                .help("Confirm the irreversible cascade delete"),
                        ),
                ),
        )
        .subcommand(
            Command::new("session").about("Log session results").subcommand(
                Command::new("settle")
                    .about("Settle end-of-session balances for one or more accounts")
                    .arg(
                        Arg::new("set")
                            .long("set")
                            .action(ArgAction::Append)
                            .required(true)
                            .value_name("ID=END_BALANCE")
                            .help("Account id and its end-of-session balance; repeatable"),
                    ),
            ),
        )
        .subcommand(
            Command::new("transfer")
                .about("Move funds between two accounts")
                .arg(Arg::new("from").long("from").required(true))
                .arg(Arg::new("to").long("to").required(true))
                .arg(Arg::new("amount").long("amount").required(true)),
        )
        .subcommand(json_flags(
            Command::new("history")
                .about("All transactions, newest first")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("stats")
                .about("Bankroll analytics")
                .subcommand(json_flags(
                    Command::new("overview").about("Totals, win rate, 7d profit/ROI, best/worst"),
                ))
                .subcommand(json_flags(
                    Command::new("curve").about("Cumulative profit per session"),
                ))
                .subcommand(json_flags(
                    Command::new("recent").about("Most recent sessions").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize))
                            .default_value("5"),
                    ),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export ledger data")
                .subcommand(
                    Command::new("transactions")
                        .about("Tabular transaction export")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("backup")
                .about("Raw serialized-state backup")
                .subcommand(Command::new("show").about("Print the raw ledger blob"))
                .subcommand(
                    Command::new("restore")
                        .about("Replace the ledger from a raw blob file")
                        .arg(Arg::new("file").long("file").required(true)),
                ),
        )
}
