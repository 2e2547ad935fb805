//! Command implementations and the plumbing they share: configuration
//! loading, input reading and output sink selection.

pub mod csv;
pub mod structure;

use anyhow::{Context, Result};
use repconv_core::ConvertConfig;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::cli::app::InputArgs;

/// Load the configuration file if given, then apply the shared overrides
pub fn load_config(path: Option<&Path>, io: &InputArgs) -> Result<ConvertConfig> {
    let mut config = match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            ConvertConfig::from_file(path)?
        }
        None => ConvertConfig::default(),
    };

    if let Some(marker) = io.comment_marker {
        config.comment_marker = marker;
    }

    Ok(config)
}

/// Read the whole report into memory
pub async fn read_input(path: &Path) -> Result<String> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Open the output file, or standard output when none is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn input_args(comment_marker: Option<char>) -> InputArgs {
        InputArgs { input: PathBuf::from("report.txt"), output: None, comment_marker }
    }

    #[test]
    fn test_load_default_config() {
        let config = load_config(None, &input_args(None)).unwrap();
        assert_eq!(config, ConvertConfig::default());
    }

    #[test]
    fn test_comment_marker_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "comment_marker = \"%\"\ndelimiter = \"|\"").unwrap();

        let config = load_config(Some(file.path()), &input_args(Some(';'))).unwrap();
        assert_eq!(config.comment_marker, ';');
        assert_eq!(config.delimiter, "|");
    }

    #[tokio::test]
    async fn test_read_missing_input() {
        let err = read_input(Path::new("/nonexistent/report.txt")).await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/report.txt"));
    }
}
