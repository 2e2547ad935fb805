//! Conversion configuration
//!
//! Settings are read from an optional TOML file and may be overridden from
//! the command line. Every field has a default, so an empty file is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ConvertError;

/// How blocks whose fields differ from the header are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Fail on the first block that does not match the header
    #[default]
    Strict,
    /// Pad short rows with empty values and truncate long ones
    Pad,
    /// Emit whatever each block contains
    Loose,
}

impl fmt::Display for MismatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Strict => "strict",
            Self::Pad => "pad",
            Self::Loose => "loose",
        };
        f.write_str(name)
    }
}

impl FromStr for MismatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "pad" => Ok(Self::Pad),
            "loose" => Ok(Self::Loose),
            other => Err(format!("unknown mismatch policy '{other}' (expected strict, pad or loose)")),
        }
    }
}

/// Main configuration for a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Separator placed between emitted fields
    pub delimiter: String,

    /// Character that starts a comment running to end of line
    pub comment_marker: char,

    /// Handling of blocks that disagree with the header
    pub on_mismatch: MismatchPolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            delimiter: ", ".to_string(),
            comment_marker: regex_utils::comment::DEFAULT_MARKER,
            on_mismatch: MismatchPolicy::default(),
        }
    }
}

impl ConvertConfig {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Check that the settings can drive a conversion
    pub fn validate(&self) -> crate::Result<()> {
        if self.delimiter.is_empty() {
            return Err(ConvertError::invalid_config("delimiter must not be empty"));
        }

        // These characters introduce field and block markers
        if matches!(self.comment_marker, '*' | '>') || self.comment_marker.is_whitespace() {
            return Err(ConvertError::invalid_config(format!(
                "'{}' cannot be used as a comment marker",
                self.comment_marker
            )));
        }

        Ok(())
    }
}
