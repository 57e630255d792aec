// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::calc::{
    CalculationResult, calculate_commission, calculate_discount, calculate_tax,
    calculate_total_with_tax,
};
use crate::utils::{parse_decimal, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("tax", sub)) => {
            let base = parse_decimal(sub.get_one::<String>("base").unwrap())?;
            let rate = parse_decimal(sub.get_one::<String>("rate").unwrap())?;
            print_result("Tax", &calculate_tax(base, rate)?);
        }
        Some(("total", sub)) => {
            let base = parse_decimal(sub.get_one::<String>("base").unwrap())?;
            let rate = parse_decimal(sub.get_one::<String>("rate").unwrap())?;
            println!("{}", calculate_total_with_tax(base, rate));
        }
        Some(("discount", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let percent = parse_decimal(sub.get_one::<String>("percent").unwrap())?;
            print_result("Final amount", &calculate_discount(amount, percent)?);
        }
        Some(("commission", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let rate = parse_decimal(sub.get_one::<String>("rate").unwrap())?;
            print_result("Net amount", &calculate_commission(amount, rate)?);
        }
        _ => {}
    }
    Ok(())
}

fn print_result(label: &str, result: &CalculationResult) {
    let mut rows = vec![vec![label.to_string(), result.value.to_string()]];
    for (k, v) in &result.metadata {
        rows.push(vec![k.clone(), v.clone()]);
    }
    println!("{}", pretty_table(&["Field", "Value"], rows));
}
