//! Splitting completion text into individual taglines.

use regex::Regex;
use std::sync::LazyLock;

/// Leading bullet or enumeration marker: `-`, `*`, `•`, `1.`, `2)`.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-*•]+|\d+[.)])\s*").expect("list marker pattern is valid")
});

/// Split completion text into taglines.
///
/// Lines are split on `\n` or `\r\n`, trimmed, and dropped when blank. The
/// number of lines is taken as-is, whatever count was requested. With
/// `strip_list_markers` a leading bullet or enumeration marker is removed
/// first, and lines left empty by that are dropped too.
pub fn parse_taglines(text: &str, strip_list_markers: bool) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .map(|line| {
            if strip_list_markers {
                LIST_MARKER.replace(line, "").trim().to_string()
            } else {
                line.to_string()
            }
        })
        .filter(|line| !line.is_empty())
        .collect()
}
