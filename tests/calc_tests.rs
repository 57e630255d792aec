// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use payctl::calc::{
    DEFAULT_TAX_RATE, calculate_balance, calculate_commission, calculate_discount,
    calculate_summary, calculate_tax, calculate_total_with_tax, project_balance, validate_amount,
};
use payctl::models::{Transaction, TxKind};
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(amount: &str, kind: TxKind) -> Transaction {
    Transaction {
        date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        amount: d(amount),
        concept: "test".into(),
        kind,
    }
}

#[test]
fn validate_amount_accepts_normal_values() {
    assert!(validate_amount(d("100.00")).is_ok());
    assert!(validate_amount(d("0.01")).is_ok());
    assert!(validate_amount(d("999999.99")).is_ok());
}

#[test]
fn validate_amount_rejects_below_minimum() {
    let err = validate_amount(d("0.001")).unwrap_err();
    assert!(err.to_string().contains("at least"));
    assert!(validate_amount(d("-50.00")).is_err());
}

#[test]
fn validate_amount_rejects_above_maximum() {
    let err = validate_amount(d("1000000.00")).unwrap_err();
    assert!(err.to_string().contains("exceeds maximum"));
}

#[test]
fn tax_default_rate() {
    let result = calculate_tax(d("100.00"), DEFAULT_TAX_RATE).unwrap();
    assert_eq!(result.value, d("21.00"));
    assert_eq!(result.metadata["tax_rate"], "0.21");
    assert_eq!(result.metadata["base_amount"], "100.00");
    assert_eq!(result.metadata["total_with_tax"], "121.00");
}

#[test]
fn tax_custom_rate() {
    let result = calculate_tax(d("100.00"), d("0.10")).unwrap();
    assert_eq!(result.value, d("10.00"));
}

#[test]
fn tax_rejects_invalid_base() {
    assert!(calculate_tax(d("-50.00"), DEFAULT_TAX_RATE).is_err());
}

#[test]
fn total_with_tax_matches_base_plus_tax() {
    for (base, rate) in [("100.00", "0.21"), ("33.33", "0.10"), ("0.01", "0.21")] {
        let total = calculate_total_with_tax(d(base), d(rate));
        let tax = calculate_tax(d(base), d(rate)).unwrap();
        assert_eq!(total, d(base) + tax.value, "base={} rate={}", base, rate);
    }
}

#[test]
fn discount_valid() {
    let result = calculate_discount(d("100.00"), d("10.00")).unwrap();
    assert_eq!(result.value, d("90.00"));
    assert_eq!(result.metadata["discount_amount"], "10.00");
    assert_eq!(result.metadata["original_amount"], "100.00");
}

#[test]
fn discount_rejects_out_of_range_percent() {
    assert!(calculate_discount(d("100.00"), d("150.00")).is_err());
    assert!(calculate_discount(d("100.00"), d("-1")).is_err());
    assert!(calculate_discount(d("100.00"), d("100")).is_ok());
    assert!(calculate_discount(d("100.00"), d("0")).is_ok());
}

#[test]
fn commission_computes_net() {
    let result = calculate_commission(d("100.00"), d("5.00")).unwrap();
    assert_eq!(result.value, d("95.00"));
    assert_eq!(result.metadata["commission_amount"], "5.00");
    assert_eq!(result.metadata["net_amount"], "95.00");
}

#[test]
fn commission_rejects_out_of_range_rate() {
    assert!(calculate_commission(d("100.00"), d("150.00")).is_err());
    assert!(calculate_commission(d("100.00"), d("-5.00")).is_err());
}

#[test]
fn balance_empty_is_zero() {
    let b = calculate_balance(&[]);
    assert_eq!(b.net, Decimal::ZERO);
    assert_eq!(b.income, Decimal::ZERO);
    assert_eq!(b.expenses, Decimal::ZERO);
}

#[test]
fn balance_partitions_by_kind() {
    let txs = vec![
        tx("1000", TxKind::Income),
        tx("300", TxKind::Expense),
        tx("200", TxKind::Expense),
    ];
    let b = calculate_balance(&txs);
    assert_eq!(b.net, d("500.00"));
    assert_eq!(b.income, d("1000"));
    assert_eq!(b.expenses, d("500"));
}

#[test]
fn balance_is_order_independent() {
    let mut txs = vec![
        tx("12.34", TxKind::Income),
        tx("0.99", TxKind::Expense),
        tx("700", TxKind::Income),
    ];
    let forward = calculate_balance(&txs);
    txs.reverse();
    let backward = calculate_balance(&txs);
    assert_eq!(forward, backward);
}

#[test]
fn projection_yields_exact_sequence() {
    let projections = project_balance(d("1000.00"), d("500.00"), d("200.00"), 3).unwrap();
    assert_eq!(projections.len(), 3);
    assert_eq!(projections[0].month, 1);
    assert_eq!(projections[0].projected_balance, d("1300.00"));
    assert_eq!(projections[1].projected_balance, d("1600.00"));
    assert_eq!(projections[2].projected_balance, d("1900.00"));
    for p in &projections {
        assert_eq!(p.monthly_change, d("300.00"));
    }
}

#[test]
fn projection_rejects_zero_months() {
    assert!(project_balance(d("1000.00"), d("500.00"), d("200.00"), 0).is_err());
}

#[test]
fn summary_empty_has_no_division() {
    let s = calculate_summary(&[]);
    assert_eq!(s.count, 0);
    assert_eq!(s.total, Decimal::ZERO);
    assert_eq!(s.average, Decimal::ZERO);
    assert_eq!(s.max, Decimal::ZERO);
    assert_eq!(s.min, Decimal::ZERO);
}

#[test]
fn summary_statistics() {
    let txs = vec![
        tx("100", TxKind::Expense),
        tx("200", TxKind::Expense),
        tx("300", TxKind::Expense),
    ];
    let s = calculate_summary(&txs);
    assert_eq!(s.count, 3);
    assert_eq!(s.total, d("600.00"));
    assert_eq!(s.average, d("200.00"));
    assert_eq!(s.max, d("300"));
    assert_eq!(s.min, d("100"));
}
