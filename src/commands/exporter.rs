// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::calc;
use crate::models::{Transaction, TxKind};
use crate::store::Store;

pub const EXPORT_VERSION: &str = "1.0";
pub const APP_NAME: &str = "Control de Pagos 2026";

/// The versioned wire document produced by `export transactions` and
/// consumed by `import transactions`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDocument {
    pub version: String,
    pub exported_at: String,
    pub app_name: String,
    pub transactions: Vec<Transaction>,
}

impl ExportDocument {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        ExportDocument {
            version: EXPORT_VERSION.to_string(),
            exported_at: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            app_name: APP_NAME.to_string(),
            transactions,
        }
    }
}

pub fn default_export_name() -> String {
    format!(
        "pagos_control_{}.json",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        Some(("report", sub)) => export_report(store, sub),
        _ => Ok(()),
    }
}

fn out_path(sub: &clap::ArgMatches, default_name: String) -> PathBuf {
    sub.get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default_name))
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let out = out_path(sub, default_export_name());
    let snapshot = store.load()?;
    let doc = ExportDocument::new(snapshot.transactions);
    let json = serde_json::to_string_pretty(&doc)?;
    std::fs::write(&out, json).with_context(|| format!("Write export {}", out.display()))?;
    store.log_operation("EXPORT", &format!("Exported {} transactions", doc.transactions.len()));
    println!("Exported {} transactions to {}", doc.transactions.len(), out.display());
    Ok(())
}

/// The printable summary report: title, generation timestamp, totals,
/// and the first 20 transactions. Layout is plain text; the content is
/// the contract.
pub fn render_report(transactions: &[Transaction]) -> String {
    let balance = calc::calculate_balance(transactions);
    let mut lines = vec![
        format!("{} - Reporte", APP_NAME),
        format!(
            "Generado: {}",
            chrono::Local::now().format("%d/%m/%Y %H:%M:%S")
        ),
        String::new(),
        "Resumen".to_string(),
        "-".repeat(40),
        format!("Total Ingresos : {:.2}", balance.income),
        format!("Total Gastos   : {:.2}", balance.expenses),
        format!("Saldo Neto     : {:.2}", balance.net),
        String::new(),
        "Transacciones Detalladas".to_string(),
        "-".repeat(40),
    ];
    for t in transactions.iter().take(20) {
        let kind = match t.kind {
            TxKind::Income => "Ingreso",
            TxKind::Expense => "Gasto",
        };
        lines.push(format!(
            "{} | {} | {} | {:.2}",
            t.date.format("%d/%m/%Y"),
            t.concept,
            kind,
            t.amount
        ));
    }
    lines.join("\n") + "\n"
}

fn export_report(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let out = out_path(
        sub,
        format!(
            "reporte_pagos_{}.txt",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        ),
    );
    let snapshot = store.load()?;
    let report = render_report(&snapshot.transactions);
    std::fs::write(&out, report).with_context(|| format!("Write report {}", out.display()))?;
    store.log_operation("REPORT", &format!("Exported report {}", out.display()));
    println!("Exported report to {}", out.display());
    Ok(())
}
