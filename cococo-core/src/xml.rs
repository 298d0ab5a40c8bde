//! XML text helpers for the SonarQube generic coverage format.

use crate::config::COVERAGE_FORMAT_VERSION;

/// Escapes the five XML special characters for use in an attribute value.
///
/// `&` is replaced in the same pass as the other characters, so entities
/// produced for `<`, `>`, `"` and `'` are never escaped again. The function is
/// not idempotent: escaping an already escaped string escapes its `&` again,
/// so raw input must be escaped exactly once.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Opening root element of the document.
pub fn coverage_open() -> String {
    format!("<coverage version=\"{COVERAGE_FORMAT_VERSION}\">")
}

/// Closing root element of the document, including the final newline.
pub const COVERAGE_CLOSE: &str = "</coverage>\n";

/// Opening `<file>` element; `path` is escaped here.
pub fn file_open(path: &str) -> String {
    format!("  <file path=\"{}\">", escape(path))
}

/// Closing `<file>` element.
pub const FILE_CLOSE: &str = "  </file>";

/// A `<lineToCover>` element.
pub fn line_to_cover(line_number: &str, covered: bool) -> String {
    format!("    <lineToCover lineNumber=\"{line_number}\" covered=\"{covered}\"/>")
}
