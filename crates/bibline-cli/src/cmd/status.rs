//! `bibline status` - store record counts

use std::path::PathBuf;

use anyhow::{Context, Result};
use bibline_store::{RecordKind, Store};
use clap::Args;
use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Store directory (overrides config)
    #[arg(long)]
    pub store: Option<PathBuf>,
}

pub fn run(args: StatusArgs, config: &Config) -> Result<()> {
    let store_dir = args.store.unwrap_or_else(|| config.store.dir.clone());
    let store = Store::open(&store_dir)
        .with_context(|| format!("failed to open store at {}", store_dir.display()))?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Kind").fg(Color::Cyan),
            Cell::new("Records").fg(Color::Cyan),
        ]);

    for kind in [RecordKind::Authors, RecordKind::Books] {
        table.add_row(vec![
            kind.dir_name().to_string(),
            store.count(kind)?.to_string(),
        ]);
    }

    eprintln!("\nstore: {}", store_dir.display());
    eprintln!("{table}");
    Ok(())
}
