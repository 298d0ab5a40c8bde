//! Argument shapes of `xcrun xccov view`.
//!
//! Current Xcode releases require `--archive` to read an `.xcresult` bundle;
//! older ones reject it. Legacy mode drops the flag.

/// Arguments listing the covered files of `archive`.
pub fn list_args(archive: &str, legacy_mode: bool) -> Vec<String> {
    let mut args = base_args(legacy_mode);
    args.push("--file-list".to_string());
    args.push(archive.to_string());
    args
}

/// Arguments printing the per-line coverage of `file` in `archive`.
pub fn view_args(file: &str, archive: &str, legacy_mode: bool) -> Vec<String> {
    let mut args = base_args(legacy_mode);
    args.push("--file".to_string());
    args.push(file.to_string());
    args.push(archive.to_string());
    args
}

fn base_args(legacy_mode: bool) -> Vec<String> {
    let mut args = vec!["xccov".to_string(), "view".to_string()];
    if !legacy_mode {
        args.push("--archive".to_string());
    }
    args
}
