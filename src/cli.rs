// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

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
    Command::new("payctl")
        .about("Household payment control: recurring bills, ledgers, and balance tracking")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the snapshot file"))
        .subcommand(
            Command::new("account")
                .about("Catalog accounts and their balances")
                .subcommand(json_flags(
                    Command::new("list").about("List accounts with current balances"),
                ))
                .subcommand(
                    Command::new("set-balance")
                        .about("Set the balance of an account")
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount").required(true)),
                ),
        )
        .subcommand(
            Command::new("template")
                .about("Recurring payment templates")
                .subcommand(json_flags(
                    Command::new("list").about("List template items"),
                ))
                .subcommand(
                    Command::new("add")
                        .about("Add a recurring payment definition")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("day")
                                .long("day")
                                .required(true)
                                .value_parser(value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("annual-month")
                                .long("annual-month")
                                .value_parser(value_parser!(u32)),
                        ),
                ),
        )
        .subcommand(
            Command::new("month")
                .about("Materialized monthly payment lists")
                .subcommand(
                    Command::new("open")
                        .about("Materialize the template for a month")
                        .arg(Arg::new("month").long("month").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List the items of a month")
                        .arg(Arg::new("month").long("month").required(true)),
                ))
                .subcommand(
                    Command::new("pay")
                        .about("Mark a monthly item paid (or unpaid with --undo)")
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("undo")
                                .long("undo")
                                .action(ArgAction::SetTrue)
                                .help("Mark the item unpaid instead"),
                        ),
                )
                .subcommand(
                    Command::new("export")
                        .about("Write the pending items of a month to a text file")
                        .arg(Arg::new("month").long("month").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("One-off income and expense transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("concept").long("concept").required(true))
                        .arg(Arg::new("kind").long("kind").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions")
                        .arg(Arg::new("month").long("month"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregate views over the ledger")
                .subcommand(json_flags(
                    Command::new("summary").about("Count/total/average/extremes"),
                ))
                .subcommand(json_flags(
                    Command::new("balance").about("Income, expenses, and net balance"),
                ))
                .subcommand(json_flags(
                    Command::new("projection")
                        .about("Project the balance forward")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .required(true)
                                .value_parser(value_parser!(u32)),
                        )
                        .arg(Arg::new("income").long("income").required(true))
                        .arg(Arg::new("expenses").long("expenses").required(true)),
                )),
        )
        .subcommand(
            Command::new("calc")
                .about("Stand-alone payment arithmetic")
                .subcommand(
                    Command::new("tax")
                        .about("Tax on a base amount")
                        .arg(Arg::new("base").long("base").required(true))
                        .arg(Arg::new("rate").long("rate").default_value("0.21")),
                )
                .subcommand(
                    Command::new("total")
                        .about("Total including tax")
                        .arg(Arg::new("base").long("base").required(true))
                        .arg(Arg::new("rate").long("rate").default_value("0.21")),
                )
                .subcommand(
                    Command::new("discount")
                        .about("Final amount after a percentage discount")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("percent").long("percent").required(true)),
                )
                .subcommand(
                    Command::new("commission")
                        .about("Net amount after commission")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("rate").long("rate").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export ledger data")
                .subcommand(
                    Command::new("transactions")
                        .about("Export transactions as a versioned JSON document")
                        .arg(Arg::new("out").long("out")),
                )
                .subcommand(
                    Command::new("report")
                        .about("Write the printable summary report")
                        .arg(Arg::new("out").long("out")),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Import ledger data")
                .subcommand(
                    Command::new("transactions")
                        .about("Restore transactions from an exported JSON document")
                        .arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check snapshot invariants"))
}
