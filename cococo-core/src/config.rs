//! Conversion options and shared constants.

use crate::threading::Threading;

/// Default command used to reach `xccov`.
pub const DEFAULT_TOOL: &str = "xcrun";

/// Version attribute of the generic coverage root element.
pub const COVERAGE_FORMAT_VERSION: &str = "1";

/// Options controlling which files are converted and how `xccov` is invoked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Drop every listed file whose path ends with one of these suffixes.
    ///
    /// Matching is a plain, case-sensitive string suffix test, so `.swift`
    /// and `Tests.swift` are both valid entries.
    pub excluded_file_extensions: Option<Vec<String>>,

    /// Drop every listed file whose path contains one of these substrings.
    pub ignored_paths: Option<Vec<String>>,

    /// Invoke `xccov` without `--archive`, as older Xcode releases require.
    pub legacy_mode: bool,

    /// Size of the worker pool converting the files of one archive.
    pub threads: Threading,
}

impl ConvertOptions {
    /// Applies both path filters, extensions first, preserving listing order.
    pub fn filter_files(&self, files: Vec<String>) -> Vec<String> {
        let mut files = files;
        if let Some(extensions) = &self.excluded_file_extensions {
            files = crate::filter::filter_by_extension(files, extensions);
        }
        if let Some(ignored) = &self.ignored_paths {
            files = crate::filter::filter_by_path_substring(files, ignored);
        }
        files
    }
}
