//! Single-file rename that never overwrites an existing target.
//!
//! `std::fs::rename` silently replaces the destination on Unix, so the
//! target is checked first. The check and the rename are two separate
//! steps; nothing else is expected to write to the data directory while
//! a run is in progress.

use std::collections::HashSet;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// What happened to one manifest row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was renamed (or would be, in dry-run mode).
    Renamed,
    /// The source path does not exist. Nothing was changed.
    SourceMissing,
    /// The target path already exists. It was left untouched.
    TargetExists,
}

/// Renames `from` to `to` in place.
///
/// Missing sources and existing targets are reported as outcomes. Any
/// other I/O error is returned to the caller.
pub fn rename_file(from: &Path, to: &Path) -> io::Result<RenameOutcome> {
    if !entry_exists(from)? {
        return Ok(RenameOutcome::SourceMissing);
    }

    if entry_exists(to)? {
        return Ok(RenameOutcome::TargetExists);
    }

    match fs::rename(from, to) {
        Ok(()) => {
            log::debug!("Renamed: {} → {}", from.display(), to.display());
            Ok(RenameOutcome::Renamed)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(RenameOutcome::SourceMissing),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(RenameOutcome::TargetExists),
        Err(e) => Err(e),
    }
}

/// Applies renames for one run.
///
/// In dry-run mode nothing is written. Planned renames are recorded
/// instead, so later rows see the directory as a real run would have
/// left it.
#[derive(Debug, Default)]
pub struct Renamer {
    dry_run: bool,
    vacated: HashSet<PathBuf>,
    created: HashSet<PathBuf>,
}

impl Renamer {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn rename(&mut self, from: &Path, to: &Path) -> io::Result<RenameOutcome> {
        if !self.dry_run {
            return rename_file(from, to);
        }

        if !self.exists(from)? {
            return Ok(RenameOutcome::SourceMissing);
        }

        if self.exists(to)? {
            return Ok(RenameOutcome::TargetExists);
        }

        log::debug!("Would rename: {} → {}", from.display(), to.display());

        self.created.remove(from);
        self.vacated.insert(from.to_path_buf());
        self.vacated.remove(to);
        self.created.insert(to.to_path_buf());

        Ok(RenameOutcome::Renamed)
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        if self.created.contains(path) {
            return Ok(true);
        }
        if self.vacated.contains(path) {
            return Ok(false);
        }
        entry_exists(path)
    }
}

/// Like `Path::try_exists`, but does not follow symlinks.
fn entry_exists(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
