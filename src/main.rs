//! Binary entry point for `mzml-rename`.

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = mzml_rename::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
