// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rust_decimal::Decimal;

use crate::catalog;
use crate::models::{Category, MonthData, MonthlyItem, TemplateItem};
use crate::store::Store;
use crate::utils::{due_date, eur, maybe_print_json, month_key, parse_month_number, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("open", sub)) => open(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("pay", sub)) => pay(store, sub)?,
        Some(("export", sub)) => export(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Instantiate the template for one month. Annual subscriptions only
/// appear in their charge month; due days clamp to the month's end.
pub fn materialize(template: &[TemplateItem], year: i32, month: u32) -> Result<Vec<MonthlyItem>> {
    let mut items = Vec::new();
    for t in template {
        if t.category == Category::SubAnnual && t.annual_month != Some(month) {
            continue;
        }
        items.push(MonthlyItem {
            tid: t.id,
            name: t.name.clone(),
            amount: t.amount,
            account_id: t.account_id,
            due: due_date(year, month, t.day)?,
            paid: false,
            category: t.category,
        });
    }
    Ok(items)
}

fn open(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month_number(sub.get_one::<String>("month").unwrap())?;
    let mut snapshot = store.load()?;
    let key = month_key(snapshot.year, month);
    if snapshot.months.contains_key(&key) {
        println!("Month {} already open", key);
        return Ok(());
    }
    let items = materialize(&snapshot.template, snapshot.year, month)?;
    let count = items.len();
    snapshot.months.insert(key.clone(), MonthData { items });
    store.save(&snapshot)?;
    store.log_operation("MONTH", &format!("Opened {} ({} items)", key, count));
    println!("Opened month {} with {} items", key, count);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month_number(sub.get_one::<String>("month").unwrap())?;
    let snapshot = store.load()?;
    let key = month_key(snapshot.year, month);
    let data = snapshot
        .months
        .get(&key)
        .ok_or_else(|| anyhow!("Month {} not open (run 'month open' first)", key))?;
    if !maybe_print_json(json_flag, jsonl_flag, &data.items)? {
        let rows: Vec<Vec<String>> = data
            .items
            .iter()
            .map(|i| {
                vec![
                    i.tid.to_string(),
                    i.due.to_string(),
                    i.name.clone(),
                    format!("{} €", eur(i.amount)),
                    catalog::account_name(i.account_id)
                        .unwrap_or("(unknown)")
                        .to_string(),
                    i.category.as_str().to_string(),
                    if i.paid { "paid" } else { "pending" }.to_string(),
                ]
            })
            .collect();
        let pending: Decimal = data
            .items
            .iter()
            .filter(|i| !i.paid)
            .map(|i| i.amount)
            .sum();
        println!(
            "{}",
            pretty_table(
                &["Id", "Due", "Name", "Amount", "Account", "Category", "Status"],
                rows,
            )
        );
        println!("Pending total: {} €", eur(pending));
    }
    Ok(())
}

fn pay(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month_number(sub.get_one::<String>("month").unwrap())?;
    let tid = *sub.get_one::<i64>("id").unwrap();
    let undo = sub.get_flag("undo");

    let mut snapshot = store.load()?;
    let key = month_key(snapshot.year, month);
    let data = snapshot
        .months
        .get_mut(&key)
        .ok_or_else(|| anyhow!("Month {} not open (run 'month open' first)", key))?;
    let item = data
        .items
        .iter_mut()
        .find(|i| i.tid == tid)
        .ok_or_else(|| anyhow!("No item {} in month {}", tid, key))?;
    item.paid = !undo;
    let name = item.name.clone();
    let state = if undo { "pending" } else { "paid" };
    store.save(&snapshot)?;
    store.log_operation("PAY", &format!("{} / {} marked {}", key, name, state));
    println!("Marked '{}' as {} in {}", name, state, key);
    Ok(())
}

fn export(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month_number(sub.get_one::<String>("month").unwrap())?;
    let snapshot = store.load()?;
    let key = month_key(snapshot.year, month);
    let data = snapshot
        .months
        .get(&key)
        .ok_or_else(|| anyhow!("Month {} not open (run 'month open' first)", key))?;
    let path = store.export_month_pending(snapshot.year, month, &data.items)?;
    println!("Exported pending items to {}", path.display());
    Ok(())
}
