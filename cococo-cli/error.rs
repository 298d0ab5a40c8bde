//! Error types for the `cococo` command.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failed run together with the program name used to report it.
#[derive(Debug)]
pub struct InvocationError {
    /// Program name to prefix in error output.
    pub program: String,
    /// Underlying error produced by processing.
    pub source: Error,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.program, self.source)
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<InvocationError> for io::Error {
    fn from(err: InvocationError) -> Self {
        io::Error::new(err.source.kind(), err)
    }
}

/// Formats an error message for stderr, respecting `-qq`.
///
/// # Parameters
///
/// - `program`: Program name prefix to use in error output.
/// - `quiet`: Quiet level (as counted by `-q` occurrences).
/// - `err`: The I/O error returned by [`crate::run_cli`].
///
/// # Returns
///
/// Returns `None` when the message should be suppressed by `quiet`,
/// otherwise returns a formatted single-line message suitable for stderr.
pub fn format_error_for_stderr(program: &str, quiet: u8, err: &io::Error) -> Option<String> {
    if quiet >= 2 {
        return None;
    }

    let run_err = err
        .get_ref()
        .and_then(|e| e.downcast_ref::<InvocationError>());

    if let Some(run_err) = run_err {
        return Some(run_err.to_string());
    }

    Some(format!("{program}: {err}"))
}

/// Main error type for `cococo` runs.
#[derive(Debug, Error)]
pub enum Error {
    /// Conversion failed (archive listing, worker pool setup)
    #[error(transparent)]
    Convert(#[from] cococo_core::Error),

    /// Failed to create or replace the output file
    #[error("{}: {source}", .path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to write the document
    #[error("{}: cannot write output: {source}", describe_destination(.path.as_ref()))]
    WriteOutput {
        /// Path to the output file, `None` for stdout
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

fn describe_destination(path: Option<&PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "(stdout)".to_string(),
    }
}

impl Error {
    /// I/O error kind best describing this failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::Convert(cococo_core::Error::InvalidThreadCount { .. }) => {
                io::ErrorKind::InvalidInput
            }
            Error::Convert(_) => io::ErrorKind::Other,
            // Preserve the original error kind
            Error::CreateOutput { source, .. } | Error::WriteOutput { source, .. } => source.kind(),
        }
    }
}

/// Specialized `Result` type for `cococo` runs.
pub type Result<T> = std::result::Result<T, Error>;
