//! Pass a single-header document through with its header replaced

use anyhow::{Context, Result};
use repconv_core::convert_structure;
use std::path::Path;
use tracing::info;

use crate::cli::app::StructureArgs;

/// Execute the structure command
pub async fn execute(args: StructureArgs, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path, &args.io)?;
    let content = super::read_input(&args.io.input).await?;
    let sink = super::open_output(args.io.output.as_deref())?;

    let summary = convert_structure(&content, &config, sink)
        .with_context(|| format!("Failed to convert {}", args.io.input.display()))?;

    match summary.header {
        Some(header) => info!("Header '{}' followed by {} lines", header, summary.lines),
        None => info!("No header line found; copied {} lines", summary.lines),
    }

    Ok(())
}
