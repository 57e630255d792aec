// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use payctl::catalog;
use payctl::errors::StoreError;
use payctl::models::{Category, MonthlyItem, Transaction, TxKind};
use payctl::store::Store;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn load_seeds_and_persists_default_snapshot() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path());
    assert!(!store.data_path().exists());

    let snapshot = store.load().unwrap();
    assert!(store.data_path().exists());
    assert_eq!(snapshot.year, catalog::YEAR);
    assert_eq!(snapshot.control_day, catalog::CONTROL_DAY);
    assert_eq!(snapshot.balances.len(), 5);
    assert!(snapshot.balances.values().all(|b| *b == Decimal::ZERO));
    assert_eq!(snapshot.template.len(), 26);
    assert!(snapshot.months.is_empty());
    assert_eq!(snapshot.next_id, catalog::FIRST_USER_ID);
    let max_template_id = snapshot.template.iter().map(|t| t.id).max().unwrap();
    assert!(snapshot.next_id > max_template_id);
}

#[test]
fn snapshot_round_trips_exactly() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path());
    let mut snapshot = store.load().unwrap();

    snapshot.transactions.push(Transaction {
        date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        amount: d("1234.56"),
        concept: "Nómina".into(),
        kind: TxKind::Income,
    });
    snapshot
        .balances
        .insert("3".into(), d("810.07"));
    store.save(&snapshot).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.transactions[0].amount, d("1234.56"));
    assert_eq!(
        loaded.transactions[0].date,
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    );
}

#[test]
fn malformed_snapshot_is_an_error_not_a_default() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path());
    std::fs::write(store.data_path(), "{not valid json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Malformed { .. }));
    // The corrupt file stays in place for the user to inspect.
    assert_eq!(
        std::fs::read_to_string(store.data_path()).unwrap(),
        "{not valid json"
    );
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path());
    let snapshot = store.load().unwrap();
    store.save(&snapshot).unwrap();
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn log_operation_appends_timestamped_lines() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path());
    store.log_operation("TEST", "first");
    store.log_operation("TEST", "second");
    let log = std::fs::read_to_string(store.log_path()).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("TEST: first"));
    assert!(lines[1].contains("TEST: second"));
    assert!(lines[0].starts_with('['));
}

fn pending_item(name: &str, due: NaiveDate, amount: &str, paid: bool) -> MonthlyItem {
    MonthlyItem {
        tid: 1,
        name: name.into(),
        amount: d(amount),
        account_id: 1,
        due,
        paid,
        category: Category::Fixed,
    }
}

#[test]
fn month_export_lists_unpaid_sorted_with_total() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path());
    let items = vec![
        pending_item("Luz", NaiveDate::from_ymd_opt(2026, 5, 20).unwrap(), "45.00", false),
        pending_item("Comida", NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(), "800.00", true),
        pending_item("InShot", NaiveDate::from_ymd_opt(2026, 5, 5).unwrap(), "15.99", false),
    ];

    let path = store.export_month_pending(2026, 5, &items).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "pendientes_2026-05.txt"
    );
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Pendientes 2026-05");
    assert_eq!(lines[1], "=".repeat(60));
    assert_eq!(lines[2], "2026-05-05 | 15.99€ | InShot");
    assert_eq!(lines[3], "2026-05-20 | 45.00€ | Luz");
    assert_eq!(lines[4], "=".repeat(60));
    assert_eq!(lines[5], "TOTAL: 60.99€");
}

#[test]
fn month_export_empty_month_still_writes_total() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path());
    let path = store.export_month_pending(2026, 11, &[]).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.ends_with("TOTAL: 0.00€\n"));
}
