// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::models::{Account, Category, MonthData, Snapshot, TemplateItem};

pub const YEAR: i32 = 2026;
pub const CONTROL_DAY: u32 = 29; // month cutoff reference
pub const FIRST_USER_ID: i64 = 300;

pub static ACCOUNTS: Lazy<Vec<Account>> = Lazy::new(|| {
    [
        (1, "BBVA – Ydaliz"),
        (2, "BBVA – Moisés"),
        (3, "Caixa – Conjunta"),
        (4, "Santander – Ydaliz"),
        (5, "Santander – Moisés"),
    ]
    .into_iter()
    .map(|(id, name)| Account {
        id,
        name: name.to_string(),
    })
    .collect()
});

fn item(id: i64, name: &str, cents: i64, day: u32, account_id: i64, category: Category) -> TemplateItem {
    TemplateItem {
        id,
        name: name.to_string(),
        amount: Decimal::new(cents, 2),
        day,
        account_id,
        category,
        annual_month: None,
    }
}

pub static FIXED_EXPENSES: Lazy<Vec<TemplateItem>> = Lazy::new(|| {
    use Category::Fixed;
    vec![
        item(1, "Cuota hipoteca", 533_66, 5, 4, Fixed),
        item(2, "Seguro hogar", 66_00, 10, 4, Fixed),
        item(3, "Seguro de vida", 52_00, 10, 3, Fixed),
        item(4, "Crédito coche", 258_00, 15, 1, Fixed),
        item(5, "Crédito complementario casa", 385_00, 15, 3, Fixed),
        item(6, "Cofidis", 145_00, 20, 1, Fixed),
        item(7, "IKEA Yda", 200_00, 25, 1, Fixed),
        item(8, "IKEA Moisés", 200_00, 25, 5, Fixed),
        item(9, "Vodafone", 15_00, 8, 1, Fixed),
        item(10, "Orange", 240_00, 8, 2, Fixed),
        item(11, "Carrefour", 100_00, 12, 1, Fixed),
        item(12, "Agua", 60_00, 18, 3, Fixed),
        item(13, "Luz", 120_00, 18, 3, Fixed),
        item(14, "Comida", 800_00, 2, 3, Fixed),
        item(15, "Curso inglés niño", 80_00, 7, 4, Fixed),
        item(16, "Karate", 50_00, 7, 4, Fixed),
        item(17, "Gasolina", 100_00, 1, 4, Fixed),
    ]
});

pub static MONTHLY_SUBSCRIPTIONS: Lazy<Vec<TemplateItem>> = Lazy::new(|| {
    use Category::SubMonthly;
    vec![
        item(101, "ChatGPT Plus", 22_99, 2, 2, SubMonthly),
        item(102, "Netflix", 16_00, 2, 2, SubMonthly),
        item(103, "iCloud+ (2 TB)", 9_99, 8, 2, SubMonthly),
        item(104, "PS Plus", 16_00, 15, 2, SubMonthly),
        item(105, "Proton VPN Plus", 12_99, 19, 2, SubMonthly),
        item(106, "X Premium", 4_00, 27, 2, SubMonthly),
        item(107, "Roblox (niño)", 11_00, 30, 2, SubMonthly),
    ]
});

pub static ANNUAL_SUBSCRIPTIONS: Lazy<Vec<TemplateItem>> = Lazy::new(|| {
    let mut inshot = item(201, "InShot Pro (Anual)", 15_99, 8, 2, Category::SubAnnual);
    inshot.annual_month = Some(5);
    let mut telegram = item(202, "Telegram Premium (Anual)", 33_99, 25, 2, Category::SubAnnual);
    telegram.annual_month = Some(9);
    vec![inshot, telegram]
});

pub fn account_name(id: i64) -> Option<&'static str> {
    ACCOUNTS
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.name.as_str())
}

pub fn account_exists(id: i64) -> bool {
    ACCOUNTS.iter().any(|a| a.id == id)
}

/// All template items in catalog order: fixed expenses first, then
/// monthly subscriptions, then annual subscriptions.
pub fn all_template_items() -> Vec<TemplateItem> {
    FIXED_EXPENSES
        .iter()
        .chain(MONTHLY_SUBSCRIPTIONS.iter())
        .chain(ANNUAL_SUBSCRIPTIONS.iter())
        .cloned()
        .collect()
}

/// The snapshot a fresh installation starts from: zeroed balances per
/// account, the static template, no months, ids seeded above the
/// highest static template id.
pub fn default_snapshot() -> Snapshot {
    let balances: BTreeMap<String, Decimal> = ACCOUNTS
        .iter()
        .map(|a| (a.id.to_string(), Decimal::ZERO))
        .collect();
    Snapshot {
        year: YEAR,
        control_day: CONTROL_DAY,
        balances,
        template: all_template_items(),
        months: BTreeMap::<String, MonthData>::new(),
        transactions: Vec::new(),
        next_id: FIRST_USER_ID,
    }
}
