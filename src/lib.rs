// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod calc;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod errors;
pub mod models;
pub mod store;
pub mod utils;
