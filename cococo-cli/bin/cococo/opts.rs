//! Command line argument parsing for cococo

use std::path::PathBuf;

use clap::Parser;

use cococo_cli::{CliConfig, TOOL_ENV};
use cococo_core::config::DEFAULT_TOOL;
use cococo_core::{ConvertOptions, Threading};

/// Convert xcresult coverage to SonarQube generic coverage XML
///
/// Every archive is read through `xcrun xccov`; the combined document is
/// written to stdout unless `--output` is given.
#[derive(Parser, Debug)]
#[command(
    name = "cococo",
    version = "0.1.1",
    about = "Convert xcresult coverage to SonarQube generic coverage XML",
    long_about = "cococo reads code coverage from Xcode result bundles with `xcrun xccov` \
                 and prints it in SonarQube's generic coverage format. Progress and \
                 per-file failures are reported on stderr."
)]
pub struct CococoOpts {
    /// Archives to convert, in output order
    #[arg(value_name = "ARCHIVE", required = true)]
    pub archives: Vec<String>,

    /// Skip files whose path ends with this suffix (e.g. `.h`)
    #[arg(
        short = 'e',
        long = "excluded-file-extensions",
        value_name = "EXT",
        value_delimiter = ','
    )]
    pub excluded_file_extensions: Vec<String>,

    /// Skip files whose path contains this text (e.g. `Pods/`)
    #[arg(
        short = 'i',
        long = "ignored-paths",
        value_name = "SUBSTRING",
        value_delimiter = ','
    )]
    pub ignored_paths: Vec<String>,

    /// Call xccov without `--archive`, for Xcode 10 `.xccovarchive` bundles
    #[arg(long = "legacy")]
    pub legacy: bool,

    /// Write the document to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Convert at most this many files at once (0 = one per CPU)
    #[arg(short = 'T', long = "threads", value_name = "NUM")]
    pub threads: Option<u32>,

    /// Command used to run xccov
    #[arg(long = "xcrun", value_name = "PATH", env = TOOL_ENV, default_value = DEFAULT_TOOL)]
    pub xcrun: String,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Hide progress. Use twice to hide per-file failures and errors too.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl CococoOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build the run configuration from the parsed flags
    pub fn config(&self) -> CliConfig {
        CliConfig {
            convert: ConvertOptions {
                excluded_file_extensions: non_empty(&self.excluded_file_extensions),
                ignored_paths: non_empty(&self.ignored_paths),
                legacy_mode: self.legacy,
                threads: self.threads.map_or(Threading::Auto, Threading::from),
            },
            output: self.output.clone(),
            tool: self.xcrun.clone(),
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}
