//! Archive and document level conversion.
//!
//! The pipeline for one archive is:
//!
//! 1. List the covered files with `xccov view --file-list` (fatal on failure)
//! 2. Drop empty lines, then apply the extension and path filters
//! 3. Convert every file on the worker pool, one `xccov view --file` each
//! 4. Collect the fragments by listing index, so completion order never
//!    affects output order
//!
//! A file whose conversion fails leaves an empty slot and is logged; its
//! siblings are unaffected. Archives are converted one after another.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info, warn};

use crate::config::{ConvertOptions, DEFAULT_TOOL};
use crate::coverage::render_file;
use crate::error::{Error, Result};
use crate::runner::ToolRunner;
use crate::threading::sanitize_threads;
use crate::{xccov, xml};


/// Converts `xcresult` archives to SonarQube generic coverage XML.
pub struct Converter<R> {
    runner: R,
    tool: String,
    options: ConvertOptions,
    pool: ThreadPool,
}

impl<R: ToolRunner> Converter<R> {
    /// Creates a converter and its worker pool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreadCount`] if `options.threads` asks for more
    /// workers than the host provides, or [`Error::ThreadPool`] if the pool
    /// cannot be started.
    pub fn new(runner: R, options: ConvertOptions) -> Result<Self> {
        let threads = sanitize_threads(options.threads)?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads as usize)
            .thread_name(|index| format!("cococo-worker-{index}"))
            .build()?;

        Ok(Self {
            runner,
            tool: DEFAULT_TOOL.to_string(),
            options,
            pool,
        })
    }

    /// Replaces the command used to reach `xccov` (`xcrun` by default).
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Options this converter was created with.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Number of workers converting files concurrently.
    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Converts all `archives`, in order, into one coverage document.
    ///
    /// # Parameters
    ///
    /// * `archives` - Paths to `.xcresult` bundles (or `.xccovarchive` in legacy mode)
    ///
    /// # Returns
    ///
    /// The complete XML document, ending with a newline. Files of the first
    /// archive come first, each archive in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListFiles`] as soon as one archive cannot be listed;
    /// no document is produced in that case. Failures of individual files are
    /// only logged.
    pub fn convert<S: AsRef<str>>(&self, archives: &[S]) -> Result<String> {
        let mut output = vec![xml::coverage_open()];
        for archive in archives {
            let fragments = self.convert_archive(archive.as_ref())?;
            output.extend(fragments.into_iter().flatten());
        }
        output.push(xml::COVERAGE_CLOSE.to_string());
        Ok(output.join("\n"))
    }

    /// Converts every file of a single archive.
    ///
    /// # Returns
    ///
    /// One slot per file that survived filtering, in listing order. A slot is
    /// `None` when that file could not be converted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListFiles`] if the file listing fails.
    pub fn convert_archive(&self, archive: &str) -> Result<Vec<Option<String>>> {
        let files = self.list_files(archive)?;
        let total = files.len();

        let fragments: Vec<Option<String>> = self.pool.install(|| {
            files
                .par_iter()
                .enumerate()
                .map(|(index, file)| {
                    info!("{index}/{total} {file}");
                    match self.convert_file(file, archive) {
                        Ok(fragment) => Some(fragment),
                        Err(err) => {
                            warn!(error = %err, "Conversion failed for: {file}");
                            None
                        }
                    }
                })
                .collect()
        });

        Ok(fragments)
    }

    /// Lists the covered files of `archive` with both filters applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListFiles`] if the tool invocation fails.
    pub fn list_files(&self, archive: &str) -> Result<Vec<String>> {
        let args = xccov::list_args(archive, self.options.legacy_mode);
        let listing = self
            .runner
            .run(&self.tool, &args)
            .map_err(|source| Error::ListFiles {
                archive: archive.to_string(),
                source,
            })?;

        let listed: Vec<String> = listing
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        let listed_count = listed.len();

        let files = self.options.filter_files(listed);
        debug!(
            archive,
            listed = listed_count,
            kept = files.len(),
            "listed covered files"
        );
        Ok(files)
    }

    /// Converts one file of `archive` into its `<file>` fragment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ViewFile`] if the tool invocation fails.
    pub fn convert_file(&self, file: &str, archive: &str) -> Result<String> {
        let args = xccov::view_args(file, archive, self.options.legacy_mode);
        let view = self
            .runner
            .run(&self.tool, &args)
            .map_err(|source| Error::ViewFile {
                file: file.to_string(),
                archive: archive.to_string(),
                source,
            })?;

        Ok(render_file(file, &view))
    }
}
