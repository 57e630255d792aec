// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod template;
pub mod months;
pub mod transactions;
pub mod reports;
pub mod calcs;
pub mod importer;
pub mod exporter;
pub mod doctor;
