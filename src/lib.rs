#![doc = include_str!("../README.md")]

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod steps;
pub mod validation;

pub use config::RenameConfig;
pub use error::*;
pub use fs::RenameOutcome;
pub use steps::rename::{RenameEntry, RenameSummary};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    let config = RenameConfig::from(cli.args);
    steps::rename::execute(&config)?;
    Ok(())
}
