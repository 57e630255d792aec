// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::calc::validate_amount;
use crate::models::{Transaction, TxKind};
use crate::store::Store;
use crate::utils::{eur, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let concept = sub.get_one::<String>("concept").unwrap().clone();
    let kind: TxKind = sub
        .get_one::<String>("kind")
        .unwrap()
        .parse()
        .map_err(|e: String| anyhow!(e))?;

    validate_amount(amount)?;

    let mut snapshot = store.load()?;
    snapshot.transactions.push(Transaction {
        date,
        amount,
        concept: concept.clone(),
        kind,
    });
    store.save(&snapshot)?;
    store.log_operation("TX", &format!("{} {} '{}'", date, amount, concept));
    println!("Recorded {} of {} € on {} ('{}')",
        match kind {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        },
        eur(amount),
        date,
        concept
    );
    Ok(())
}

/// Transactions matching the list filters, newest first.
pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let snapshot = store.load()?;
    let month = sub.get_one::<String>("month");
    let mut data: Vec<Transaction> = snapshot
        .transactions
        .into_iter()
        .filter(|t| match month {
            Some(m) => t.date.format("%Y-%m").to_string() == **m,
            None => true,
        })
        .collect();
    data.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.date.to_string(),
                    t.concept.clone(),
                    format!("{} €", eur(t.amount)),
                    match t.kind {
                        TxKind::Income => "income".to_string(),
                        TxKind::Expense => "expense".to_string(),
                    },
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "Concept", "Amount", "Kind"], rows));
    }
    Ok(())
}
