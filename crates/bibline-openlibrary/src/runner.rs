//! Two-phase loader orchestration
//!
//! Phase 1 loads the author dump fully; phase 2 loads the works dump and
//! resolves book→author references against the store phase 1 populated.
//! That ordering is owned here: [`run`] never starts works before the
//! author phase has finished.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use bibline_core::{ParseError, ProgressContext};
use bibline_store::{RecordKind, Store};
use indicatif::ProgressBar;

use crate::config::LoadConfig;
use crate::resolve::resolve_author_names;
use crate::transform::{transform_author, transform_work};

/// Statistics from one load phase.
#[derive(Debug)]
pub struct LoadSummary {
    pub lines_scanned: usize,
    pub records_written: usize,
    pub lines_skipped: usize,
    pub elapsed: std::time::Duration,
}

impl LoadSummary {
    pub fn log(&self, phase: &str) {
        log::info!(
            "{phase}: {} records from {} lines ({} skipped) in {:.1}s",
            self.records_written,
            self.lines_scanned,
            self.lines_skipped,
            self.elapsed.as_secs_f64()
        );
    }
}

/// Run both phases in order: authors, then works.
pub fn run(
    config: &LoadConfig,
    store: &Store,
    progress: &ProgressContext,
) -> Result<(LoadSummary, LoadSummary)> {
    let authors = load_authors(config, store, progress)?;
    let works = load_works(config, store, progress)?;
    Ok((authors, works))
}

/// Phase 1: load the author dump into the store.
pub fn load_authors(
    config: &LoadConfig,
    store: &Store,
    progress: &ProgressContext,
) -> Result<LoadSummary> {
    let pb = progress.scan_bar("authors");
    let summary = scan_dump(&config.authors_dump, config.max_authors, &pb, |line| {
        let author = transform_author(line)?;
        store.put(RecordKind::Authors, &author.id, &author)?;
        log::info!("author {}: {}", author.id, author.name);
        Ok(())
    })?;
    pb.finish_and_clear();
    summary.log("authors");
    Ok(summary)
}

/// Phase 2: load the works dump, resolving author names per book.
///
/// Assumes the author store is already populated (by [`load_authors`] in
/// this run or a previous one); unresolved ids come out as the sentinel,
/// not an error.
pub fn load_works(
    config: &LoadConfig,
    store: &Store,
    progress: &ProgressContext,
) -> Result<LoadSummary> {
    let pb = progress.scan_bar("works");
    let summary = scan_dump(&config.works_dump, config.max_books, &pb, |line| {
        let mut book = transform_work(line)?;
        if !book.author_ids.is_empty() {
            book.author_names = resolve_author_names(store, &book.author_ids)?;
        }
        store.put(RecordKind::Books, &book.id, &book)?;
        log::info!("book {}: {}", book.id, book.name);
        Ok(())
    })?;
    pb.finish_and_clear();
    summary.log("works");
    Ok(summary)
}

/// Per-line outcome inside a scan. `ParseError` is contained (skip + warn);
/// anything else aborts the scan.
enum LineFailure {
    Parse(ParseError),
    Fatal(anyhow::Error),
}

impl From<ParseError> for LineFailure {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<bibline_store::StoreError> for LineFailure {
    fn from(e: bibline_store::StoreError) -> Self {
        Self::Fatal(e.into())
    }
}

/// Sequential scan over one dump file.
///
/// Lines are independent: a parse failure is logged with its line number
/// and skipped, and the scan continues. I/O failures reading the file and
/// store failures inside `process` are fatal. `max_lines` caps how many
/// lines are read, not how many succeed.
fn scan_dump(
    path: &Path,
    max_lines: Option<usize>,
    pb: &ProgressBar,
    mut process: impl FnMut(&str) -> std::result::Result<(), LineFailure>,
) -> Result<LoadSummary> {
    let start = Instant::now();
    let file =
        File::open(path).with_context(|| format!("failed to open dump: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut lines_scanned = 0usize;
    let mut records_written = 0usize;
    let mut lines_skipped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        if let Some(limit) = max_lines {
            if lines_scanned >= limit {
                log::debug!("line cap {limit} reached for {}", path.display());
                break;
            }
        }
        let line = line
            .with_context(|| format!("read failed at {}:{}", path.display(), idx + 1))?;
        lines_scanned += 1;
        pb.inc(1);

        match process(&line) {
            Ok(()) => records_written += 1,
            Err(LineFailure::Parse(e)) => {
                lines_skipped += 1;
                log::warn!("{}:{}: skipped: {e}", path.display(), idx + 1);
            }
            Err(LineFailure::Fatal(e)) => {
                return Err(e.context(format!("at {}:{}", path.display(), idx + 1)));
            }
        }
    }

    Ok(LoadSummary {
        lines_scanned,
        records_written,
        lines_skipped,
        elapsed: start.elapsed(),
    })
}
