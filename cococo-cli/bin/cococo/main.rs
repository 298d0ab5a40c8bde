//! Xcode coverage to SonarQube converter
//!
//! Reads line coverage from `.xcresult` bundles through `xcrun xccov` and
//! prints SonarQube's generic coverage XML.

use std::process;

mod opts;

use opts::CococoOpts;

use cococo_cli::{format_error_for_stderr, init_logging, run_cli, PROGRAM_NAME};

fn main() -> std::io::Result<()> {
    let opts = CococoOpts::parse();
    let config = opts.config();

    init_logging(config.verbose, config.quiet);

    if let Err(err) = run_cli(&opts.archives, &config, PROGRAM_NAME) {
        if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, config.quiet, &err) {
            eprintln!("{msg}");
        }
        process::exit(1);
    }

    Ok(())
}
