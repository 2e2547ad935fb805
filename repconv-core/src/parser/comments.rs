//! Inline comment removal

use regex::Regex;
use std::borrow::Cow;
use tracing::trace;

use crate::error::{ConvertError, Result};

/// Removes comment spans from raw report text
#[derive(Debug, Clone)]
pub struct CommentStripper {
    marker: char,
    pattern: Regex,
}

impl CommentStripper {
    /// Create a stripper for the given comment marker
    pub fn new(marker: char) -> Result<Self> {
        let pattern = if marker == regex_utils::comment::DEFAULT_MARKER {
            Regex::clone(&regex_utils::comment::HASH_PATTERN)
        } else {
            regex_utils::comment::pattern_for(marker)
                .map_err(|e| ConvertError::invalid_config(format!("comment marker '{marker}': {e}")))?
        };

        Ok(Self { marker, pattern })
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Remove every span from the marker to the end of its line.
    ///
    /// Line terminators are kept. A line left blank by the removal was a
    /// comment line and is dropped entirely. Text without any marker is
    /// returned borrowed.
    pub fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !text.contains(self.marker) {
            return Cow::Borrowed(text);
        }

        let mut cleaned = String::with_capacity(text.len());
        for (index, line) in text.split_inclusive('\n').enumerate() {
            if !line.contains(self.marker) {
                cleaned.push_str(line);
                continue;
            }

            let stripped = self.pattern.replace_all(line, "");
            if stripped.trim().is_empty() {
                trace!(line = index + 1, "dropping comment line");
                continue;
            }
            cleaned.push_str(&stripped);
        }

        Cow::Owned(cleaned)
    }
}

impl Default for CommentStripper {
    fn default() -> Self {
        Self {
            marker: regex_utils::comment::DEFAULT_MARKER,
            pattern: Regex::clone(&regex_utils::comment::HASH_PATTERN),
        }
    }
}

/// Strip comments introduced by `marker` from `text`
pub fn strip_comments(text: &str, marker: char) -> Result<Cow<'_, str>> {
    Ok(CommentStripper::new(marker)?.strip(text))
}
