//! Configuration types and constants for the `cococo` command.

use std::path::PathBuf;

use cococo_core::config::DEFAULT_TOOL;
use cococo_core::ConvertOptions;

/// Program name used as prefix of error messages.
pub const PROGRAM_NAME: &str = "cococo";

/// Environment variable overriding the command used to reach `xccov`.
pub const TOOL_ENV: &str = "COCOCO_XCRUN";

/// Configuration for one `cococo` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Filters, invocation mode and worker count for the conversion
    pub convert: ConvertOptions,
    /// Destination file, or `None` for stdout
    pub output: Option<PathBuf>,
    /// Command used to reach `xccov`
    pub tool: String,
    /// Verbose output
    pub verbose: bool,
    /// Quiet level (number of `-q` flags)
    pub quiet: u8,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            convert: ConvertOptions::default(),
            output: None,
            tool: DEFAULT_TOOL.to_string(),
            verbose: false,
            quiet: 0,
        }
    }
}
