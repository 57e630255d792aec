// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::catalog;
use crate::models::Snapshot;
use crate::store::Store;
use crate::utils::pretty_table;

pub fn handle(store: &Store) -> Result<()> {
    let snapshot = store.load()?;
    let rows = check(&snapshot);
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Snapshot invariant checks: account references must resolve against
/// the catalog and next_id must exceed every issued id.
pub fn check(snapshot: &Snapshot) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for t in &snapshot.template {
        if !catalog::account_exists(t.account_id) {
            rows.push(vec![
                "template_unknown_account".into(),
                format!("'{}' (id {}) -> account {}", t.name, t.id, t.account_id),
            ]);
        }
        if t.category == crate::models::Category::SubAnnual && t.annual_month.is_none() {
            rows.push(vec![
                "annual_without_month".into(),
                format!("'{}' (id {})", t.name, t.id),
            ]);
        }
    }

    for (key, data) in &snapshot.months {
        for item in &data.items {
            if !catalog::account_exists(item.account_id) {
                rows.push(vec![
                    "month_unknown_account".into(),
                    format!("{} '{}' -> account {}", key, item.name, item.account_id),
                ]);
            }
        }
    }

    for key in snapshot.balances.keys() {
        match key.parse::<i64>() {
            Ok(id) if catalog::account_exists(id) => {}
            _ => rows.push(vec!["balance_unknown_account".into(), key.clone()]),
        }
    }

    let max_issued = snapshot
        .template
        .iter()
        .map(|t| t.id)
        .max()
        .unwrap_or(0);
    if snapshot.next_id <= max_issued {
        rows.push(vec![
            "next_id_not_monotonic".into(),
            format!("next_id {} <= max issued id {}", snapshot.next_id, max_issued),
        ]);
    }

    rows
}
