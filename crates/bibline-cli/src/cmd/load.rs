//! `bibline load` / `authors` / `works` - run the dump loader phases

use std::path::PathBuf;

use anyhow::{Context, Result};
use bibline_core::SharedProgress;
use bibline_openlibrary::{LoadConfig, load_authors, load_works, run};
use bibline_store::Store;
use clap::Args;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Author dump path (overrides config)
    #[arg(long)]
    pub authors_dump: Option<PathBuf>,

    /// Works dump path (overrides config)
    #[arg(long)]
    pub works_dump: Option<PathBuf>,

    /// Store directory (overrides config)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Cap on author dump lines to process
    #[arg(long)]
    pub max_authors: Option<usize>,

    /// Cap on works dump lines to process
    #[arg(long)]
    pub max_books: Option<usize>,
}

/// Which part of the pipeline to run.
#[derive(Debug, Clone, Copy)]
pub enum Phase {
    /// Authors then works, in order.
    All,
    /// Author dump only.
    Authors,
    /// Works dump only. Resolution reads whatever the author store
    /// already holds.
    Works,
}

impl LoadArgs {
    /// Merge CLI overrides over the global config.
    fn load_config(&self, config: &Config) -> LoadConfig {
        LoadConfig {
            authors_dump: self
                .authors_dump
                .clone()
                .unwrap_or_else(|| config.dumps.authors.clone()),
            works_dump: self
                .works_dump
                .clone()
                .unwrap_or_else(|| config.dumps.works.clone()),
            max_authors: self.max_authors.or(config.load.max_authors),
            max_books: self.max_books.or(config.load.max_books),
        }
    }

    fn store_dir(&self, config: &Config) -> PathBuf {
        self.store.clone().unwrap_or_else(|| config.store.dir.clone())
    }
}

pub fn run_phase(
    phase: Phase,
    args: LoadArgs,
    config: &Config,
    progress: &SharedProgress,
) -> Result<()> {
    let load_config = args.load_config(config);
    let store_dir = args.store_dir(config);
    let store = Store::open(&store_dir)
        .with_context(|| format!("failed to open store at {}", store_dir.display()))?;

    match phase {
        Phase::All => {
            run(&load_config, &store, progress)?;
        }
        Phase::Authors => {
            load_authors(&load_config, &store, progress)?;
        }
        Phase::Works => {
            load_works(&load_config, &store, progress)?;
        }
    }
    Ok(())
}
