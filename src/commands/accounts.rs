// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog;
use crate::store::Store;
use crate::utils::{eur, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("set-balance", sub)) => set_balance(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct AccountRow {
    pub id: i64,
    pub name: String,
    pub balance: Decimal,
}

pub fn account_rows(store: &Store) -> Result<Vec<AccountRow>> {
    let snapshot = store.load()?;
    let rows = catalog::ACCOUNTS
        .iter()
        .map(|a| AccountRow {
            id: a.id,
            name: a.name.clone(),
            balance: snapshot
                .balances
                .get(&a.id.to_string())
                .copied()
                .unwrap_or(Decimal::ZERO),
        })
        .collect();
    Ok(rows)
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = account_rows(store)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| vec![r.id.to_string(), r.name.clone(), format!("{} €", eur(r.balance))])
            .collect();
        println!("{}", pretty_table(&["Id", "Account", "Balance"], rows));
    }
    Ok(())
}

fn set_balance(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let account_id = *sub.get_one::<i64>("account").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;

    let name = catalog::account_name(account_id)
        .ok_or_else(|| anyhow!("Account {} not found", account_id))?;

    let mut snapshot = store.load()?;
    snapshot
        .balances
        .insert(account_id.to_string(), crate::calc::round2(amount));
    store.save(&snapshot)?;
    store.log_operation("BALANCE", &format!("{} set to {}", name, amount));
    println!("Balance of '{}' set to {} €", name, eur(amount));
    Ok(())
}
