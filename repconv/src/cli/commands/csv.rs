//! Convert a report's repeated blocks to CSV

use anyhow::{Context, Result};
use repconv_core::convert_to_csv;
use std::path::Path;
use tracing::info;

use crate::cli::app::CsvArgs;

/// Execute the csv command
pub async fn execute(args: CsvArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = super::load_config(config_path, &args.io)?;
    if let Some(delimiter) = args.delimiter {
        config.delimiter = delimiter;
    }
    if let Some(policy) = args.on_mismatch {
        config.on_mismatch = policy;
    }

    let content = super::read_input(&args.io.input).await?;
    let sink = super::open_output(args.io.output.as_deref())?;

    let summary = convert_to_csv(&content, &config, sink)
        .with_context(|| format!("Failed to convert {}", args.io.input.display()))?;

    if summary.blocks == 0 {
        info!("No `> rep` blocks found in {}", args.io.input.display());
    } else {
        info!(
            "Converted {} blocks with {} columns from {}",
            summary.blocks,
            summary.columns,
            args.io.input.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::app::InputArgs;
    use repconv_core::MismatchPolicy;
    use std::fs;
    use tempfile::TempDir;

    fn args(dir: &TempDir, report: &str, on_mismatch: Option<MismatchPolicy>) -> CsvArgs {
        let input = dir.path().join("report.txt");
        fs::write(&input, report).unwrap();
        CsvArgs {
            io: InputArgs { input, output: Some(dir.path().join("out.csv")), comment_marker: None },
            delimiter: None,
            on_mismatch,
        }
    }

    #[tokio::test]
    async fn test_execute_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let report = "> rep 1 # first\n** A\nx1\n** B\ny1\n> rep 2\n** A\nx2\n** B\ny2\n";

        execute(args(&dir, report, None), None).await.unwrap();

        let written = fs::read_to_string(dir.path().join("out.csv")).unwrap();
        assert_eq!(written, "A, B\nx1, y1\nx2, y2\n");
    }

    #[tokio::test]
    async fn test_execute_reports_mismatch() {
        let dir = TempDir::new().unwrap();
        let report = "> rep 1\n** A\nx1\n** B\ny1\n> rep 2\n** A\nx2\n";

        let err = execute(args(&dir, report, None), None).await.unwrap_err();
        assert!(format!("{err:#}").contains("block 2 (rep 2)"));

        execute(args(&dir, report, Some(MismatchPolicy::Pad)), None).await.unwrap();
        let written = fs::read_to_string(dir.path().join("out.csv")).unwrap();
        assert_eq!(written, "A, B\nx1, y1\nx2, \n");
    }
}
