//! Regex utilities for repconv
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// Comment span patterns
pub mod comment {
    use super::*;

    /// Default marker used by report files
    pub const DEFAULT_MARKER: char = '#';

    pub static HASH_PATTERN: Lazy<Regex> =
        Lazy::new(|| pattern_for(DEFAULT_MARKER).expect("Invalid regex pattern"));

    /// Build the span pattern for a marker character.
    ///
    /// The span runs from the marker up to, but not including, the line
    /// terminator so that `\r\n` endings survive stripping.
    pub fn pattern_for(marker: char) -> Result<Regex, regex::Error> {
        let escaped = regex::escape(&marker.to_string());
        Regex::new(&format!(r"{escaped}[^\r\n]*"))
    }
}

/// Repetition block marker patterns (`> rep 3`, `> rep 3.1`)
pub mod block {
    use super::*;

    pub static MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^>\s*rep\s+(\d+(?:\.\d+)?)\s*$").expect("Invalid regex pattern")
    });

    /// Any other `>` line, or a line of dashes such as `--`, is a separator
    /// and never part of a block body
    pub static SEPARATOR_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\s*(?:>|-+\s*$)").expect("Invalid regex pattern"));

    /// Extract the numeric identifier from a marker line
    pub fn marker_id(line: &str) -> Option<&str> {
        MARKER_PATTERN
            .captures(line.trim_end())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn is_separator(line: &str) -> bool {
        SEPARATOR_PATTERN.is_match(line)
    }
}

/// Field marker patterns (`** Label`)
pub mod field {
    use super::*;

    pub static MARKER_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\*\* (.+)$").expect("Invalid regex pattern"));

    /// Extract the label from a field marker line.
    ///
    /// Marker characters and whitespace are removed from both ends, so
    /// `** * Name *` yields `Name`. A line with nothing left is not a label.
    pub fn label(line: &str) -> Option<&str> {
        let line = line.trim_end_matches(['\r', '\n']);
        MARKER_PATTERN
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim_matches(|c: char| c == '*' || c.is_whitespace()))
            .filter(|label| !label.is_empty())
    }
}
