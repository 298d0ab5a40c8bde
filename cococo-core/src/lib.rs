//! # cococo-core
//!
//! Conversion pipeline from Xcode `xcresult` coverage archives to SonarQube's
//! generic coverage XML format.
//!
//! The archive itself is never parsed here. Every piece of coverage data comes
//! from the `xccov` tool (normally invoked through `xcrun`): one call lists the
//! covered files of an archive, then one call per file yields its line hit
//! counts. The per-file calls run on a dedicated worker pool and their results
//! are reassembled in listing order.
//!
//! ```no_run
//! use cococo_core::{CommandRunner, ConvertOptions, Converter};
//!
//! let converter = Converter::new(CommandRunner, ConvertOptions::default())?;
//! let xml = converter.convert(&["Test.xcresult"])?;
//! print!("{xml}");
//! # Ok::<(), cococo_core::Error>(())
//! ```

pub mod config;
pub mod converter;
pub mod coverage;
pub mod error;
pub mod filter;
pub mod runner;
pub mod threading;
pub mod xccov;
pub mod xml;

pub use config::ConvertOptions;
pub use converter::Converter;
pub use error::{Error, Result, ToolError};
pub use runner::{CommandRunner, ToolRunner};
pub use threading::Threading;
