use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mzml-rename", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub args: RenameArgs,
}

/// Options for a manifest-driven rename run.
///
/// Every option falls back to an environment variable, then to a default,
/// so the tool runs with no arguments from inside the data directory.
#[derive(Args, Debug, Clone)]
pub struct RenameArgs {
    /// Semicolon-delimited sample list (header row, then `id;old;new` rows)
    #[arg(
        long = "manifest",
        short = 'm',
        value_name = "PATH",
        env = "MZML_RENAME_MANIFEST",
        default_value = "samplelist.csv"
    )]
    pub manifest_path: PathBuf,

    /// Directory holding the files to rename
    #[arg(
        long,
        short = 'd',
        value_name = "DIR",
        env = "MZML_RENAME_DATA_DIR",
        default_value = "."
    )]
    pub data_dir: PathBuf,

    /// Extension appended to both the old stem and the new name
    #[arg(
        long,
        short = 'e',
        value_name = "EXT",
        env = "MZML_RENAME_EXTENSION",
        default_value = "mzML"
    )]
    pub extension: String,

    /// Field delimiter used by the manifest
    #[arg(
        long,
        value_name = "CHAR",
        env = "MZML_RENAME_DELIMITER",
        default_value_t = ';'
    )]
    pub delimiter: char,

    /// Report what would be renamed without touching any file
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}
