//! Shared functionality for the `cococo` command-line tool.
//!
//! The binary only parses options; configuration, logging setup, conversion
//! and output handling live here so they can be exercised from tests.

mod config;
mod error;
mod io;
mod logging;
mod process;


pub use config::{CliConfig, PROGRAM_NAME, TOOL_ENV};
pub use error::{format_error_for_stderr, Error, InvocationError, Result};
pub use io::write_document;
pub use logging::{init_logging, log_level};
pub use process::{convert_archives, convert_archives_with, process_archives, run_cli};
