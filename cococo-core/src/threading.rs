//! Sizing of the worker pool that converts the files of an archive.

use crate::error::{Error, Result};

/// Worker count for per-file conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Threading {
    /// Use one worker per available parallel execution unit.
    ///
    /// Workers spend nearly all of their time blocked on `xccov`, so no
    /// threads are held back for the rest of the system.
    #[default]
    Auto,
    /// Use an explicit number of workers.
    ///
    /// The count must not exceed the available parallelism. If 0 is
    /// specified, it will be treated as `Auto`.
    Exact(u32),
}

impl From<u32> for Threading {
    fn from(count: u32) -> Self {
        match count {
            0 => Threading::Auto,
            n => Threading::Exact(n),
        }
    }
}

/// Validates and converts a threading configuration to a concrete worker count.
///
/// # Parameters
///
/// * `threads` - The threading configuration to validate and convert
///
/// # Returns
///
/// * `Ok(u32)` - The worker count to use
/// * `Err(Error::InvalidThreadCount)` - If the requested count exceeds the available parallelism
pub(crate) fn sanitize_threads(threads: Threading) -> Result<u32> {
    let maximum = available_threads();
    match threads {
        Threading::Auto | Threading::Exact(0) => Ok(maximum),
        Threading::Exact(requested) if requested <= maximum => Ok(requested),
        Threading::Exact(requested) => Err(Error::InvalidThreadCount { requested, maximum }),
    }
}

/// Number of parallel execution units on this host, at least 1.
fn available_threads() -> u32 {
    let count = std::thread::available_parallelism().map_or(1, |n| n.get());

    // Convert to u32, handling potential overflow on exotic architectures
    u32::try_from(count).unwrap_or(u32::MAX)
}
