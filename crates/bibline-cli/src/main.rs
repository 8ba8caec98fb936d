//! bibline - OpenLibrary dump loader
//!
//! Loads the OpenLibrary author and works dumps into a keyed record
//! store, resolving book→author references along the way.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use cmd::load::{LoadArgs, Phase};
use config::Config;

#[derive(Parser)]
#[command(name = "bibline")]
#[command(about = "OpenLibrary dump loader")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./bibline.toml or ~/.config/bibline/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Load both dumps: authors first, then works
    Load(LoadArgs),
    /// Load the author dump only
    Authors(LoadArgs),
    /// Load the works dump only (author store must already be populated)
    Works(LoadArgs),
    /// Show store record counts
    Status(cmd::status::StatusArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Progress context (TTY auto-detect)
    let progress = Arc::new(bibline_core::ProgressContext::new());

    // Logging:
    //   TTY:     quiet (warn) unless --debug  — progress bars show activity
    //   non-TTY: info unless --debug          — logs are the only progress indicator
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = if is_tty { !cli.debug } else { false };
    bibline_core::init_logging(quiet, cli.debug, multi);

    // Load configuration
    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Command::Load(args) => cmd::load::run_phase(Phase::All, args, &config, &progress),
        Command::Authors(args) => cmd::load::run_phase(Phase::Authors, args, &config, &progress),
        Command::Works(args) => cmd::load::run_phase(Phase::Works, args, &config, &progress),
        Command::Status(args) => cmd::status::run(args, &config),
        Command::Config => {
            use comfy_table::{
                Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
            };

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);

            table.add_row(vec![
                "Author dump",
                &config.dumps.authors.display().to_string(),
            ]);
            table.add_row(vec![
                "Works dump",
                &config.dumps.works.display().to_string(),
            ]);
            table.add_row(vec!["Store", &config.store.dir.display().to_string()]);
            table.add_row(vec![
                "Max authors",
                &config
                    .load
                    .max_authors
                    .map_or_else(|| "unlimited".to_string(), |n| n.to_string()),
            ]);
            table.add_row(vec![
                "Max books",
                &config
                    .load
                    .max_books
                    .map_or_else(|| "unlimited".to_string(), |n| n.to_string()),
            ]);

            eprintln!("\n{table}");
            Ok(())
        }
    }
}
