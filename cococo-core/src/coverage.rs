//! Parsing of `xccov view --file` output into coverage line records.
//!
//! Each line of the tool output looks like `"  42: 3"`, where the part before
//! `": "` is the source line number and the part after it is the hit count.
//! Lines that are not executable end with `*` and carry no coverage
//! information. Anything else that does not split into exactly two parts is
//! ignored.

use crate::xml;

/// Marker `xccov` appends to lines that are not executable.
const NOT_EXECUTABLE_MARKER: char = '*';

/// Separator between line number and hit count.
const FIELD_SEPARATOR: &str = ": ";

/// Coverage of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCoverage<'a> {
    /// Line number, trimmed but otherwise kept as printed by the tool.
    pub line_number: &'a str,
    /// `false` when the hit count starts with `0`.
    pub covered: bool,
}

/// Parses one line of `xccov` output.
///
/// Returns `None` for non-executable lines and for lines that do not consist
/// of exactly two `": "`-separated fields.
pub fn parse_line(line: &str) -> Option<LineCoverage<'_>> {
    if line.ends_with(NOT_EXECUTABLE_MARKER) {
        return None;
    }

    let mut fields = line.split(FIELD_SEPARATOR);
    let (Some(number), Some(hits), None) = (fields.next(), fields.next(), fields.next()) else {
        return None;
    };

    Some(LineCoverage {
        line_number: number.trim(),
        covered: !hits.starts_with('0'),
    })
}

/// Renders the `<file>` fragment for one file from its `xccov` output.
///
/// # Parameters
///
/// * `path` - Path of the file as listed in the archive (escaped here)
/// * `view_output` - Raw standard output of `xccov view --file`
///
/// # Returns
///
/// The fragment lines joined with `\n`, without a trailing newline.
pub fn render_file(path: &str, view_output: &str) -> String {
    let mut output = vec![xml::file_open(path)];
    output.extend(
        view_output
            .split('\n')
            .filter(|line| !line.is_empty())
            .filter_map(parse_line)
            .map(|record| xml::line_to_cover(record.line_number, record.covered)),
    );
    output.push(xml::FILE_CLOSE.to_string());
    output.join("\n")
}
