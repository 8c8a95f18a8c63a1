//! Run configuration.
//!
//! Built from [`RenameArgs`] on the command line, or directly in code.

use crate::cli::RenameArgs;
use crate::error::Result;
use crate::validation::{normalize_extension, validate_data_dir, validate_delimiter};
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "mzML";
pub const DEFAULT_DELIMITER: char = ';';

/// Values checked and normalized by [`RenameConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preflight {
    /// Extension without a leading dot.
    pub extension: String,
    /// Delimiter as the byte handed to the CSV reader.
    pub delimiter: u8,
}

/// Where the manifest and data files live, and how to read the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameConfig {
    pub manifest_path: PathBuf,
    pub data_dir: PathBuf,
    pub extension: String,
    pub delimiter: char,
    pub dry_run: bool,
}

impl RenameConfig {
    pub fn new(
        manifest_path: impl Into<PathBuf>,
        data_dir: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            data_dir: data_dir.into(),
            extension: extension.into(),
            delimiter: DEFAULT_DELIMITER,
            dry_run: false,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs preflight checks.
    ///
    /// The manifest itself is not checked here; opening it reports a
    /// [`RenameError::ManifestUnreadable`](crate::error::RenameError::ManifestUnreadable)
    /// instead.
    pub fn validate(&self) -> Result<Preflight> {
        let extension = normalize_extension(&self.extension)?;
        let delimiter = validate_delimiter(self.delimiter)?;
        validate_data_dir(&self.data_dir)?;
        Ok(Preflight {
            extension,
            delimiter,
        })
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl From<RenameArgs> for RenameConfig {
    fn from(args: RenameArgs) -> Self {
        RenameConfig::new(args.manifest_path, args.data_dir, args.extension)
            .with_delimiter(args.delimiter)
            .with_dry_run(args.dry_run)
    }
}
