//! Error types for coverage tool invocations and archive conversion.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single external tool invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The command could not be started (missing binary, permissions).
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// Command that was executed
        command: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The command ran but did not exit successfully.
    #[error("`{command}` {}{}", describe_exit(.code), describe_stderr(.stderr))]
    Failed {
        /// Command that was executed
        command: String,
        /// Exit code, or `None` when terminated by a signal
        code: Option<i32>,
        /// Trimmed standard error of the command
        stderr: String,
    },

    /// Standard output was not valid UTF-8.
    #[error("`{command}` produced output that is not valid UTF-8")]
    NonUtf8 {
        /// Command that was executed
        command: String,
        /// Decoding error
        #[source]
        source: FromUtf8Error,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Main error type for conversion operations.
///
/// Which variant is returned tells the caller which stage of the pipeline
/// failed: listing an archive is fatal for the whole run, while viewing a
/// single file is absorbed by the archive converter and only logged.
#[derive(Debug, Error)]
pub enum Error {
    /// Listing the covered files of an archive failed
    #[error("{archive}: cannot list covered files: {source}")]
    ListFiles {
        /// Path to the archive
        archive: String,
        /// Tool failure
        #[source]
        source: ToolError,
    },

    /// Viewing the line coverage of a single file failed
    #[error("{file}: cannot view coverage in {archive}: {source}")]
    ViewFile {
        /// Path of the file within the archive
        file: String,
        /// Path to the archive
        archive: String,
        /// Tool failure
        #[source]
        source: ToolError,
    },

    /// The requested worker count exceeds what the host can run in parallel.
    #[error("requested {requested} threads exceeds available parallelism of {maximum}")]
    InvalidThreadCount {
        /// Number of threads requested by the user
        requested: u32,
        /// Maximum thread count for the current system
        maximum: u32,
    },

    /// The worker pool could not be created.
    #[error("cannot create worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
