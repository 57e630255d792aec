// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::errors::ValidationError;
use crate::models::{Transaction, TxKind};

pub const MIN_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2); // 999999.99
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(21, 0, 0, false, 2); // 21% VAT

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Round to two decimal places, half away from zero. Every monetary
/// figure leaving this module passes through here.
pub fn round2(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Result of a single calculation. Metadata amounts are exact decimal
/// strings so they survive serialization without binary-float drift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub value: Decimal,
    pub metadata: BTreeMap<String, String>,
}

pub fn validate_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount < MIN_AMOUNT {
        return Err(ValidationError::new(format!(
            "Amount must be at least {}",
            MIN_AMOUNT
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::new(format!(
            "Amount exceeds maximum {}",
            MAX_AMOUNT
        )));
    }
    Ok(())
}

pub fn calculate_tax(base: Decimal, rate: Decimal) -> Result<CalculationResult, ValidationError> {
    validate_amount(base)?;
    let tax = round2(base * rate);
    let mut metadata = BTreeMap::new();
    metadata.insert("base_amount".into(), base.to_string());
    metadata.insert("tax_rate".into(), rate.to_string());
    metadata.insert("total_with_tax".into(), (base + tax).to_string());
    Ok(CalculationResult {
        value: tax,
        metadata,
    })
}

pub fn calculate_total_with_tax(base: Decimal, rate: Decimal) -> Decimal {
    round2(base * (Decimal::ONE + rate))
}

pub fn calculate_discount(
    amount: Decimal,
    percent: Decimal,
) -> Result<CalculationResult, ValidationError> {
    if percent < Decimal::ZERO || percent > ONE_HUNDRED {
        return Err(ValidationError::new("Discount must be between 0 and 100%"));
    }
    let discount = round2(amount * percent / ONE_HUNDRED);
    let final_amount = round2(amount - discount);
    let mut metadata = BTreeMap::new();
    metadata.insert("original_amount".into(), amount.to_string());
    metadata.insert("discount_percent".into(), percent.to_string());
    metadata.insert("discount_amount".into(), discount.to_string());
    Ok(CalculationResult {
        value: final_amount,
        metadata,
    })
}

/// Commission on a gross amount. The rate is bounded to [0, 100] like
/// a discount percentage.
pub fn calculate_commission(
    amount: Decimal,
    rate: Decimal,
) -> Result<CalculationResult, ValidationError> {
    if rate < Decimal::ZERO || rate > ONE_HUNDRED {
        return Err(ValidationError::new(
            "Commission rate must be between 0 and 100%",
        ));
    }
    let commission = round2(amount * rate / ONE_HUNDRED);
    let net = round2(amount - commission);
    let mut metadata = BTreeMap::new();
    metadata.insert("gross_amount".into(), amount.to_string());
    metadata.insert("commission_rate".into(), rate.to_string());
    metadata.insert("commission_amount".into(), commission.to_string());
    metadata.insert("net_amount".into(), net.to_string());
    Ok(CalculationResult {
        value: net,
        metadata,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balance {
    pub net: Decimal,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Partition transactions by kind and sum each side. Sums commute, so
/// the result is independent of transaction order.
pub fn calculate_balance(transactions: &[Transaction]) -> Balance {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for tx in transactions {
        match tx.kind {
            TxKind::Income => income += tx.amount,
            TxKind::Expense => expenses += tx.amount,
        }
    }
    Balance {
        net: round2(income - expenses),
        income,
        expenses,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub month: u32,
    pub projected_balance: Decimal,
    pub monthly_change: Decimal,
}

pub fn project_balance(
    current_balance: Decimal,
    monthly_income: Decimal,
    monthly_expenses: Decimal,
    months: u32,
) -> Result<Vec<Projection>, ValidationError> {
    if months < 1 {
        return Err(ValidationError::new("Projection months must be at least 1"));
    }
    let change = round2(monthly_income - monthly_expenses);
    let mut balance = current_balance;
    let mut projections = Vec::with_capacity(months as usize);
    for month in 1..=months {
        balance = round2(balance + monthly_income - monthly_expenses);
        projections.push(Projection {
            month,
            projected_balance: balance,
            monthly_change: change,
        });
    }
    Ok(projections)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total: Decimal,
    pub average: Decimal,
    pub max: Decimal,
    pub min: Decimal,
    pub timestamp: String,
}

/// Summary statistics over a transaction list. Total and average are
/// rounded; max and min are reported from the raw amounts.
pub fn calculate_summary(transactions: &[Transaction]) -> Summary {
    let timestamp = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    if transactions.is_empty() {
        return Summary {
            count: 0,
            total: Decimal::ZERO,
            average: Decimal::ZERO,
            max: Decimal::ZERO,
            min: Decimal::ZERO,
            timestamp,
        };
    }
    let amounts: Vec<Decimal> = transactions.iter().map(|t| t.amount).collect();
    let total = round2(amounts.iter().copied().sum());
    let average = round2(total / Decimal::from(transactions.len()));
    let max = amounts.iter().copied().max().unwrap_or(Decimal::ZERO);
    let min = amounts.iter().copied().min().unwrap_or(Decimal::ZERO);
    Summary {
        count: transactions.len(),
        total,
        average,
        max,
        min,
        timestamp,
    }
}
