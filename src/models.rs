// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bank account from the static catalog. Never mutated at runtime;
/// template items and balances reference it by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
}

/// Recurring payment categories. The wire tag is `type` to stay
/// compatible with snapshots written by earlier versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "fixed")]
    Fixed,
    #[serde(rename = "sub_monthly")]
    SubMonthly,
    #[serde(rename = "sub_annual")]
    SubAnnual,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fixed => "fixed",
            Category::SubMonthly => "sub_monthly",
            Category::SubAnnual => "sub_annual",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(Category::Fixed),
            "sub_monthly" => Ok(Category::SubMonthly),
            "sub_annual" => Ok(Category::SubAnnual),
            other => Err(format!(
                "Unknown category '{}' (use fixed|sub_monthly|sub_annual)",
                other
            )),
        }
    }
}

/// A recurring payment definition. `annual_month` is only present for
/// the `sub_annual` category and names the calendar month the charge
/// applies in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateItem {
    pub id: i64,
    pub name: String,
    pub amount: Decimal,
    pub day: u32,
    pub account_id: i64,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub annual_month: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl std::str::FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(format!("Unknown kind '{}' (use income|expense)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub concept: String,
    pub kind: TxKind,
}

/// A template item materialized for one concrete month. `paid` is the
/// only field that changes after materialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyItem {
    pub tid: i64,
    pub name: String,
    pub amount: Decimal,
    pub account_id: i64,
    pub due: NaiveDate,
    pub paid: bool,
    #[serde(rename = "type")]
    pub category: Category,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthData {
    pub items: Vec<MonthlyItem>,
}

/// The complete persisted application state. Saved and loaded as a
/// single JSON document; there is no partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub year: i32,
    pub control_day: u32,
    pub balances: BTreeMap<String, Decimal>,
    pub template: Vec<TemplateItem>,
    pub months: BTreeMap<String, MonthData>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub next_id: i64,
}

impl Snapshot {
    /// Issue a fresh id, keeping `next_id` ahead of everything handed out.
    pub fn take_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
