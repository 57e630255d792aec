// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::calc::validate_amount;
use crate::catalog;
use crate::models::{Category, TemplateItem};
use crate::store::Store;
use crate::utils::{eur, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("add", sub)) => add(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = store.load()?;
    if !maybe_print_json(json_flag, jsonl_flag, &snapshot.template)? {
        let rows: Vec<Vec<String>> = snapshot
            .template
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.name.clone(),
                    format!("{} €", eur(t.amount)),
                    t.day.to_string(),
                    catalog::account_name(t.account_id)
                        .unwrap_or("(unknown)")
                        .to_string(),
                    t.category.as_str().to_string(),
                    t.annual_month.map(|m| m.to_string()).unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Name", "Amount", "Day", "Account", "Category", "Annual month"],
                rows,
            )
        );
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let day = *sub.get_one::<u32>("day").unwrap();
    let account_id = *sub.get_one::<i64>("account").unwrap();
    let category: Category = sub
        .get_one::<String>("category")
        .unwrap()
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    let annual_month = sub.get_one::<u32>("annual-month").copied();

    validate_amount(amount)?;
    if !(1..=31).contains(&day) {
        return Err(anyhow!("Day must be between 1 and 31"));
    }
    if !catalog::account_exists(account_id) {
        return Err(anyhow!("Account {} not found", account_id));
    }
    match (category, annual_month) {
        (Category::SubAnnual, None) => {
            return Err(anyhow!("Annual subscriptions require --annual-month"));
        }
        (Category::SubAnnual, Some(m)) if !(1..=12).contains(&m) => {
            return Err(anyhow!("Annual month must be between 1 and 12"));
        }
        (c, Some(_)) if c != Category::SubAnnual => {
            return Err(anyhow!("--annual-month only applies to sub_annual items"));
        }
        _ => {}
    }

    let mut snapshot = store.load()?;
    let id = snapshot.take_id();
    snapshot.template.push(TemplateItem {
        id,
        name: name.clone(),
        amount,
        day,
        account_id,
        category,
        annual_month,
    });
    store.save(&snapshot)?;
    store.log_operation("TEMPLATE", &format!("Added '{}' (id {})", name, id));
    println!("Added template item '{}' with id {}", name, id);
    Ok(())
}
