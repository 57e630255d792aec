// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::catalog;
use crate::errors::StoreError;
use crate::models::{MonthlyItem, Snapshot};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.payctl", "Payctl", "payctl"));

const DATA_FILE: &str = "control_pagos.json";
const LOG_FILE: &str = "operaciones.txt";

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir)
}

/// Owns the snapshot file and the append-only operation log. One store
/// per process; commands load, mutate, and save through it.
pub struct Store {
    data_path: PathBuf,
    log_path: PathBuf,
}

pub fn open_or_init() -> Result<Store> {
    Ok(Store::at(&data_dir()?))
}

impl Store {
    pub fn at(dir: &Path) -> Store {
        Store {
            data_path: dir.join(DATA_FILE),
            log_path: dir.join(LOG_FILE),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Read the snapshot, or seed and persist the default one when no
    /// file exists yet. An existing-but-corrupt file is an error; it is
    /// never silently replaced.
    pub fn load(&self) -> Result<Snapshot, StoreError> {
        if self.data_path.exists() {
            let content = fs::read_to_string(&self.data_path).map_err(|source| {
                StoreError::Read {
                    path: self.data_path.clone(),
                    source,
                }
            })?;
            return serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                path: self.data_path.clone(),
                source,
            });
        }
        let snapshot = catalog::default_snapshot();
        self.save(&snapshot)?;
        self.log_operation("INIT", "Seeded default snapshot");
        Ok(snapshot)
    }

    /// Serialize the whole snapshot. Writes to a temp file and renames
    /// so a failed write leaves the previous version intact.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(snapshot).map_err(|source| {
            StoreError::Malformed {
                path: self.data_path.clone(),
                source,
            }
        })?;
        if let Some(parent) = self.data_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.data_path.clone(),
                source,
            })?;
        }
        let tmp = self.data_path.with_extension("json.tmp");
        let write = |path: &Path| -> std::io::Result<()> {
            let mut f = fs::File::create(path)?;
            f.write_all(json.as_bytes())?;
            f.flush()?;
            Ok(())
        };
        write(&tmp).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.data_path).map_err(|source| StoreError::Write {
            path: self.data_path.clone(),
            source,
        })?;
        self.log_operation("SAVE", "Snapshot saved");
        Ok(())
    }

    /// Append one timestamped line to the operation log. Logging is
    /// best-effort and never aborts the caller.
    pub fn log_operation(&self, action: &str, detail: &str) {
        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] {}: {}\n", ts, action, detail);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut f| f.write_all(line.as_bytes()));
        if let Err(e) = result {
            eprintln!("warning: could not log operation: {}", e);
        }
    }

    /// Write the unpaid items of a month as a plain-text listing next
    /// to the data file. Deterministic: items sort by due date.
    pub fn export_month_pending(
        &self,
        year: i32,
        month: u32,
        items: &[MonthlyItem],
    ) -> Result<PathBuf, StoreError> {
        let out_path = self
            .data_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(format!("pendientes_{:04}-{:02}.txt", year, month));

        let mut pending: Vec<&MonthlyItem> = items.iter().filter(|i| !i.paid).collect();
        pending.sort_by_key(|i| i.due);
        let total: Decimal = pending.iter().map(|i| i.amount).sum();

        let mut lines = vec![
            format!("Pendientes {:04}-{:02}", year, month),
            "=".repeat(60),
        ];
        for item in &pending {
            lines.push(format!("{} | {:.2}€ | {}", item.due, item.amount, item.name));
        }
        lines.push("=".repeat(60));
        lines.push(format!("TOTAL: {:.2}€", total));

        fs::write(&out_path, lines.join("\n") + "\n").map_err(|source| StoreError::Write {
            path: out_path.clone(),
            source,
        })?;
        self.log_operation(
            "EXPORT",
            &format!(
                "Exported {}",
                out_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            ),
        );
        Ok(out_path)
    }
}
