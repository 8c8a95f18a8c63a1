//! Orchestration of a manifest-driven rename run.
//!
//! Rows are processed one at a time in manifest order. Missing sources and
//! existing targets are reported and skipped; every other failure aborts
//! the run and leaves earlier renames in place.

use crate::config::RenameConfig;
use crate::error::{RenameError, Result};
use crate::fs::{RenameOutcome, Renamer};
use crate::manifest::{Manifest, ManifestRow};

use colored::Colorize;
use std::path::{Path, PathBuf};

/// Result of processing one manifest row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub line: u64,
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub outcome: RenameOutcome,
}

/// Per-row results of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub entries: Vec<RenameEntry>,
}

impl RenameSummary {
    pub fn record(&mut self, entry: RenameEntry) {
        self.entries.push(entry);
    }

    fn count(&self, outcome: RenameOutcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    pub fn renamed(&self) -> usize {
        self.count(RenameOutcome::Renamed)
    }

    pub fn source_missing(&self) -> usize {
        self.count(RenameOutcome::SourceMissing)
    }

    pub fn target_exists(&self) -> usize {
        self.count(RenameOutcome::TargetExists)
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

/// Renames the files listed in the configured manifest.
///
/// ## Phases
///
/// 1. Preflight checks (extension, delimiter, data directory)
/// 2. Open the manifest
/// 3. Rename each row, printing a diagnostic for skipped rows
/// 4. Print the completion line
///
/// Returns an error on the first fatal failure. The completion line is
/// only printed when every row was processed.
pub fn execute(config: &RenameConfig) -> Result<RenameSummary> {
    let preflight = config.validate()?;

    log::debug!(
        "Manifest: {}, data directory: {}, extension: .{}",
        config.manifest_path.display(),
        config.data_dir.display(),
        preflight.extension
    );

    let mut manifest = Manifest::open(&config.manifest_path, preflight.delimiter)?;
    let mut renamer = Renamer::new(config.dry_run);
    let mut summary = RenameSummary::default();

    for row in manifest.rows() {
        let entry = process_row(
            &row?,
            &config.data_dir,
            &preflight.extension,
            &mut renamer,
        )?;
        report(&entry, config.dry_run);
        summary.record(entry);
    }

    log::info!(
        "{} row(s): {} renamed, {} not found, {} already existed",
        summary.total(),
        summary.renamed(),
        summary.source_missing(),
        summary.target_exists()
    );

    if config.dry_run {
        println!("{}", "Renaming completed. (dry run)".green().bold());
    } else {
        println!("{}", "Renaming completed.".green().bold());
    }

    Ok(summary)
}

fn process_row(
    row: &ManifestRow,
    data_dir: &Path,
    extension: &str,
    renamer: &mut Renamer,
) -> Result<RenameEntry> {
    let old_path = row.old_path(data_dir, extension);
    let new_path = row.new_path(data_dir, extension);

    log::debug!(
        "Line {}: {} → {}",
        row.line,
        old_path.display(),
        new_path.display()
    );

    let outcome = renamer
        .rename(&old_path, &new_path)
        .map_err(|source| RenameError::RenameFailed {
            from: old_path.clone(),
            to: new_path.clone(),
            source,
        })?;

    Ok(RenameEntry {
        line: row.line,
        old_path,
        new_path,
        outcome,
    })
}

fn report(entry: &RenameEntry, dry_run: bool) {
    match entry.outcome {
        RenameOutcome::Renamed if dry_run => println!(
            "Would rename: {} → {}",
            entry.old_path.display(),
            entry.new_path.display()
        ),
        RenameOutcome::Renamed => {}
        RenameOutcome::SourceMissing => println!(
            "{}",
            format!("File not found: {}", entry.old_path.display()).yellow()
        ),
        RenameOutcome::TargetExists => println!(
            "{}",
            format!("File already exists: {}", entry.new_path.display()).yellow()
        ),
    }
}
