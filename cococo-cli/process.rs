//! High-level conversion and CLI orchestration.

use std::io;

use cococo_core::{CommandRunner, Converter, ToolRunner};
use tracing::debug;

use crate::config::CliConfig;
use crate::error::{InvocationError, Result};
use crate::io::write_document;

/// Converts `archives` with a caller-provided tool runner.
///
/// # Parameters
///
/// * `runner` - Runner used for every `xccov` invocation
/// * `archives` - Archive paths, converted in the given order
/// * `config` - CLI configuration (filters, legacy mode, threads, tool)
///
/// # Returns
///
/// The complete coverage document.
///
/// # Errors
///
/// Returns an error if the worker pool cannot be created or any archive
/// cannot be listed.
pub fn convert_archives_with<R: ToolRunner>(
    runner: R,
    archives: &[String],
    config: &CliConfig,
) -> Result<String> {
    let converter = Converter::new(runner, config.convert.clone())?.with_tool(&config.tool);
    debug!(
        workers = converter.worker_count(),
        archives = archives.len(),
        tool = %config.tool,
        "starting conversion"
    );

    Ok(converter.convert(archives)?)
}

/// Converts `archives` by running the configured coverage tool.
///
/// # Errors
///
/// See [`convert_archives_with`].
pub fn convert_archives(archives: &[String], config: &CliConfig) -> Result<String> {
    convert_archives_with(CommandRunner, archives, config)
}

/// Converts `archives` and writes the document to the configured output.
///
/// Nothing is written when the conversion fails.
///
/// # Errors
///
/// Returns an error if the conversion fails or the document cannot be written.
pub fn process_archives(archives: &[String], config: &CliConfig) -> Result<()> {
    let document = convert_archives(archives, config)?;
    write_document(&document, config.output.as_deref())
}

/// Runs the `cococo` command with error context.
///
/// This is a convenience wrapper around [`process_archives`] that attaches
/// the program name to the error for reporting on stderr.
///
/// # Errors
///
/// Returns an error wrapping an [`InvocationError`] if processing fails.
pub fn run_cli(archives: &[String], config: &CliConfig, program: &str) -> io::Result<()> {
    process_archives(archives, config).map_err(|source| {
        io::Error::from(InvocationError {
            program: program.to_string(),
            source,
        })
    })
}
