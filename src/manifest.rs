//! Sample manifest parsing.
//!
//! A manifest is a delimited text file with one header row followed by
//! data rows of the form `id;old;new`. Only the second and third fields
//! are used. Rows are read lazily, one at a time.

use crate::error::{RenameError, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Number of fields a data row must have (`id`, source, target).
pub const MIN_FIELDS: usize = 3;

/// One data row of the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRow {
    /// 1-based line in the manifest where the row starts.
    pub line: u64,
    /// Source identifier; may carry its own extension (`sampleA.raw`).
    pub source: String,
    /// Target identifier, used verbatim as the new file name.
    pub target: String,
}

impl ManifestRow {
    /// Text of the source identifier before its first `.`.
    pub fn source_stem(&self) -> &str {
        stem(&self.source)
    }

    /// `dir/<source stem>.<ext>`
    pub fn old_path(&self, dir: &Path, extension: &str) -> PathBuf {
        dir.join(format!("{}.{}", self.source_stem(), extension))
    }

    /// `dir/<target>.<ext>`
    pub fn new_path(&self, dir: &Path, extension: &str) -> PathBuf {
        dir.join(format!("{}.{}", self.target, extension))
    }
}

/// Returns the part of `name` before the first `.`, or all of it.
pub fn stem(name: &str) -> &str {
    name.split_once('.').map_or(name, |(stem, _)| stem)
}

/// Streaming reader over manifest rows.
///
/// The header row is consumed by the underlying CSV reader and never
/// returned as data.
pub struct Manifest<R> {
    reader: csv::Reader<R>,
}

impl Manifest<File> {
    /// Opens a manifest file. The file is closed when the `Manifest` is dropped.
    pub fn open(path: &Path, delimiter: u8) -> Result<Self> {
        let file = File::open(path).map_err(|source| RenameError::ManifestUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Opened manifest: {}", path.display());
        Ok(Self::from_reader(file, delimiter))
    }
}

impl<R: Read> Manifest<R> {
    pub fn from_reader(rdr: R, delimiter: u8) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);

        Self { reader }
    }

    /// Iterates over the data rows in manifest order.
    ///
    /// Yields [`RenameError::MalformedRow`] for a row with fewer than
    /// [`MIN_FIELDS`] fields. Blank lines are not rows and are skipped.
    /// Callers are expected to stop at the first error.
    pub fn rows(&mut self) -> impl Iterator<Item = Result<ManifestRow>> + '_ {
        self.reader.records().map(|record| {
            let record = record?;
            let line = record.position().map_or(0, |pos| pos.line());

            if record.len() < MIN_FIELDS {
                return Err(RenameError::MalformedRow {
                    line,
                    found: record.len(),
                });
            }

            Ok(ManifestRow {
                line,
                source: record[1].to_string(),
                target: record[2].to_string(),
            })
        })
    }
}
