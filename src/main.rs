// Copyright (c) 2025 Payctl Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use payctl::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = store::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            store.load()?;
            println!("Snapshot initialized at {}", store.data_path().display());
        }
        Some(("account", sub)) => commands::accounts::handle(&store, sub)?,
        Some(("template", sub)) => commands::template::handle(&store, sub)?,
        Some(("month", sub)) => commands::months::handle(&store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("calc", sub)) => commands::calcs::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
