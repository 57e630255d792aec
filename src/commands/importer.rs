// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::errors::ValidationError;
use crate::models::Transaction;
use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(store, sub),
        _ => Ok(()),
    }
}

/// Fail-fast structural validation of an export document. The first
/// missing key aborts with a message naming it; nothing is imported on
/// failure.
pub fn validate_document(doc: &Value) -> Result<(), ValidationError> {
    for key in ["version", "app_name", "transactions"] {
        if doc.get(key).is_none() {
            return Err(ValidationError::new(format!("Missing required key: {}", key)));
        }
    }
    let transactions = doc
        .get("transactions")
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::new("Transactions must be a list"))?;
    for tx in transactions {
        if !tx.is_object() {
            return Err(ValidationError::new("Each transaction must be an object"));
        }
        for key in ["date", "amount", "concept", "kind"] {
            if tx.get(key).is_none() {
                return Err(ValidationError::new(format!(
                    "Transaction missing key: {}",
                    key
                )));
            }
        }
    }
    Ok(())
}

/// Parse and validate an export document, returning its transactions.
pub fn parse_document(content: &str) -> Result<Vec<Transaction>> {
    let doc: Value = serde_json::from_str(content).context("Malformed JSON document")?;
    validate_document(&doc)?;
    let transactions: Vec<Transaction> =
        serde_json::from_value(doc["transactions"].clone()).context("Invalid transaction data")?;
    Ok(transactions)
}

fn import_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Open import file {}", path))?;
    let transactions = parse_document(&content)?;

    let mut snapshot = store.load()?;
    let count = transactions.len();
    snapshot.transactions = transactions;
    store.save(&snapshot)?;
    store.log_operation("IMPORT", &format!("Imported {} transactions", count));
    println!("Imported {} transactions from {}", count, path);
    Ok(())
}
