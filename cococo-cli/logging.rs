//! Diagnostic output on stderr.

use std::io::IsTerminal;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Maps `-v` and `-q` to the default log level.
///
/// `-q` hides per-file progress, `-qq` also hides per-file failures.
pub fn log_level(verbose: bool, quiet: u8) -> LevelFilter {
    match (verbose, quiet) {
        (true, _) => LevelFilter::DEBUG,
        (false, 0) => LevelFilter::INFO,
        (false, 1) => LevelFilter::WARN,
        (false, _) => LevelFilter::ERROR,
    }
}

/// Installs the global subscriber writing diagnostics to stderr.
///
/// `RUST_LOG` takes precedence over the level derived from the flags. Stdout
/// is left to the coverage document.
pub fn init_logging(verbose: bool, quiet: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(log_level(verbose, quiet).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
