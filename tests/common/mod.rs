//! Shared fixtures for mzml-rename tests
//!
//! Each test builds a throwaway project layout with a sample manifest and a
//! data directory, then drives the binary through the command line.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MANIFEST: &str = "id;old;new\n1;sampleA;newA\n2;sampleB;newB\n";

/// Project root with `samplelist.csv` and a `mzml/` data directory
pub struct Project {
    pub temp: TempDir,
}

#[allow(unused)]
impl Project {
    pub fn new(manifest: &str, files: &[&str]) -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("samplelist.csv"), manifest).unwrap();

        let data_dir = temp.path().join("mzml");
        fs::create_dir(&data_dir).unwrap();
        for name in files {
            fs::write(data_dir.join(name), format!("contents of {name}")).unwrap();
        }

        Self { temp }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn manifest(&self) -> PathBuf {
        self.root().join("samplelist.csv")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root().join("mzml")
    }

    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir().join(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.data_file(name).exists()
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.data_file(name)).unwrap()
    }

    /// Sorted names of the files left in the data directory
    pub fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.data_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Command with no inherited configuration from the environment
pub fn rename_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("mzml-rename");
    cmd.env_remove("MZML_RENAME_MANIFEST")
        .env_remove("MZML_RENAME_DATA_DIR")
        .env_remove("MZML_RENAME_EXTENSION")
        .env_remove("MZML_RENAME_DELIMITER")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Helper to run a rename against a project
pub fn run_rename(project: &Project, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = rename_cmd();
    cmd.arg("--manifest")
        .arg(project.manifest())
        .arg("--data-dir")
        .arg(project.data_dir())
        .args(extra_args)
        .current_dir(project.root());

    cmd.assert()
}
