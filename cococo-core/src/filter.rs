//! Path filters applied to the file listing of an archive.
//!
//! Both filters are plain string tests: no case folding, no path
//! normalization, and the relative order of surviving entries is kept.

/// Removes every path that ends with one of `excluded_extensions`.
///
/// # Parameters
///
/// * `paths` - File paths as listed by `xccov`
/// * `excluded_extensions` - Suffixes to exclude (e.g. `".swift"`, `".h"`)
///
/// # Returns
///
/// The paths that do not end with any of the given suffixes.
pub fn filter_by_extension<S: AsRef<str>>(
    paths: Vec<String>,
    excluded_extensions: &[S],
) -> Vec<String> {
    paths
        .into_iter()
        .filter(|path| {
            !excluded_extensions
                .iter()
                .any(|ext| path.ends_with(ext.as_ref()))
        })
        .collect()
}

/// Removes every path that contains one of `ignored_substrings`.
///
/// # Parameters
///
/// * `paths` - File paths as listed by `xccov`
/// * `ignored_substrings` - Substrings to exclude (e.g. `"Pods/"`)
///
/// # Returns
///
/// The paths that contain none of the given substrings.
pub fn filter_by_path_substring<S: AsRef<str>>(
    paths: Vec<String>,
    ignored_substrings: &[S],
) -> Vec<String> {
    paths
        .into_iter()
        .filter(|path| {
            !ignored_substrings
                .iter()
                .any(|ignored| path.contains(ignored.as_ref()))
        })
        .collect()
}
