// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use payctl::cli;
use payctl::commands::exporter::{self, APP_NAME, render_report};
use payctl::commands::importer;
use payctl::models::{Transaction, TxKind};
use payctl::store::Store;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(day: u32, amount: &str, concept: &str, kind: TxKind) -> Transaction {
    Transaction {
        date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
        amount: d(amount),
        concept: concept.into(),
        kind,
    }
}

fn seeded_store(dir: &std::path::Path, transactions: Vec<Transaction>) -> Store {
    let store = Store::at(dir);
    let mut snapshot = store.load().unwrap();
    snapshot.transactions = transactions;
    store.save(&snapshot).unwrap();
    store
}

#[test]
fn export_writes_versioned_document() {
    let dir = tempdir().unwrap();
    let store = seeded_store(
        dir.path(),
        vec![
            tx(5, "1500.00", "Nómina", TxKind::Income),
            tx(18, "60.00", "Agua", TxKind::Expense),
        ],
    );

    let out = dir.path().join("export.json");
    let out_str = out.to_string_lossy().to_string();
    let matches = cli::build_cli().get_matches_from([
        "payctl", "export", "transactions", "--out", &out_str,
    ]);
    if let Some(("export", sub)) = matches.subcommand() {
        exporter::handle(&store, sub).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["version"], "1.0");
    assert_eq!(doc["app_name"], APP_NAME);
    assert!(doc["exported_at"].is_string());
    assert_eq!(doc["transactions"].as_array().unwrap().len(), 2);
    assert_eq!(doc["transactions"][0]["amount"], "1500.00");
    assert_eq!(doc["transactions"][0]["date"], "2026-01-05");
}

#[test]
fn export_then_import_round_trips_the_ledger() {
    let dir = tempdir().unwrap();
    let transactions = vec![
        tx(5, "1500.00", "Nómina", TxKind::Income),
        tx(12, "123.45", "Carrefour", TxKind::Expense),
    ];
    let store = seeded_store(dir.path(), transactions.clone());

    let out = dir.path().join("export.json");
    let out_str = out.to_string_lossy().to_string();
    let matches = cli::build_cli().get_matches_from([
        "payctl", "export", "transactions", "--out", &out_str,
    ]);
    if let Some(("export", sub)) = matches.subcommand() {
        exporter::handle(&store, sub).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let other_dir = tempdir().unwrap();
    let other = Store::at(other_dir.path());
    other.load().unwrap();
    let matches = cli::build_cli().get_matches_from([
        "payctl", "import", "transactions", "--path", &out_str,
    ]);
    if let Some(("import", sub)) = matches.subcommand() {
        importer::handle(&other, sub).unwrap();
    } else {
        panic!("no import subcommand");
    }

    assert_eq!(other.load().unwrap().transactions, transactions);
}

#[test]
fn report_contains_totals_and_rows() {
    let report = render_report(&[
        tx(5, "1500.00", "Nómina", TxKind::Income),
        tx(18, "60.00", "Agua", TxKind::Expense),
    ]);
    assert!(report.starts_with("Control de Pagos 2026 - Reporte"));
    assert!(report.contains("Generado: "));
    assert!(report.contains("Total Ingresos : 1500.00"));
    assert!(report.contains("Total Gastos   : 60.00"));
    assert!(report.contains("Saldo Neto     : 1440.00"));
    assert!(report.contains("05/01/2026 | Nómina | Ingreso | 1500.00"));
}

#[test]
fn report_truncates_to_twenty_transactions() {
    let transactions: Vec<Transaction> = (1..=25)
        .map(|i| tx((i % 28) + 1, "10.00", &format!("Gasto {}", i), TxKind::Expense))
        .collect();
    let report = render_report(&transactions);
    assert!(report.contains("Gasto 20"));
    assert!(!report.contains("Gasto 21"));
}
