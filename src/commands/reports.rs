// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::calc;
use crate::store::Store;
use crate::utils::{eur, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("balance", sub)) => balance(store, sub)?,
        Some(("projection", sub)) => projection(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = store.load()?;
    let s = calc::calculate_summary(&snapshot.transactions);
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![
            vec!["Transactions".to_string(), s.count.to_string()],
            vec!["Total".to_string(), format!("{} €", eur(s.total))],
            vec!["Average".to_string(), format!("{} €", eur(s.average))],
            vec!["Max".to_string(), format!("{} €", eur(s.max))],
            vec!["Min".to_string(), format!("{} €", eur(s.min))],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}

fn balance(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = store.load()?;
    let b = calc::calculate_balance(&snapshot.transactions);
    if !maybe_print_json(json_flag, jsonl_flag, &b)? {
        let rows = vec![
            vec!["Income".to_string(), format!("{} €", eur(b.income))],
            vec!["Expenses".to_string(), format!("{} €", eur(b.expenses))],
            vec!["Net".to_string(), format!("{} €", eur(b.net))],
        ];
        println!("{}", pretty_table(&["Side", "Amount"], rows));
    }
    Ok(())
}

fn projection(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months = *sub.get_one::<u32>("months").unwrap();
    let income = parse_decimal(sub.get_one::<String>("income").unwrap())?;
    let expenses = parse_decimal(sub.get_one::<String>("expenses").unwrap())?;

    let snapshot = store.load()?;
    let current = calc::calculate_balance(&snapshot.transactions).net;
    let projections = calc::project_balance(current, income, expenses, months)?;
    if !maybe_print_json(json_flag, jsonl_flag, &projections)? {
        let rows: Vec<Vec<String>> = projections
            .iter()
            .map(|p| {
                vec![
                    p.month.to_string(),
                    format!("{} €", eur(p.projected_balance)),
                    format!("{} €", eur(p.monthly_change)),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Projected balance", "Monthly change"], rows)
        );
    }
    Ok(())
}
