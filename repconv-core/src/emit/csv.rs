//! CSV output for record blocks

use std::io::Write;
use tracing::{debug, info, warn};

use crate::config::{ConvertConfig, MismatchPolicy};
use crate::error::{ConvertError, Result};
use crate::model::{EmitSummary, Field, RecordBlock};
use crate::parser::{CommentStripper, record_blocks};

/// Writes one header row from the first block and one data row per block
pub struct CsvEmitter<W: Write> {
    writer: W,
    delimiter: String,
    policy: MismatchPolicy,
    header: Option<Vec<String>>,
    summary: EmitSummary,
}

impl<W: Write> CsvEmitter<W> {
    pub fn new(writer: W, config: &ConvertConfig) -> Self {
        Self {
            writer,
            delimiter: config.delimiter.clone(),
            policy: config.on_mismatch,
            header: None,
            summary: EmitSummary::default(),
        }
    }

    /// Header labels, once the first block has been emitted
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Emit the data row for `block`, preceded by the header row if this
    /// is the first block seen.
    pub fn emit_block(&mut self, block: &RecordBlock<'_>) -> Result<()> {
        let fields = block.fields();

        let values = match &self.header {
            Some(header) => {
                let (values, adjusted) = conform(block, header, &fields, self.policy)?;
                if adjusted {
                    self.summary.adjusted += 1;
                }
                values
            }
            None => {
                if fields.is_empty() {
                    return Err(ConvertError::EmptyBlock {
                        position: block.position(),
                        marker: block.marker.to_string(),
                    });
                }

                let labels: Vec<String> = fields.iter().map(|f| f.label.to_string()).collect();
                writeln!(self.writer, "{}", labels.join(self.delimiter.as_str()))?;
                debug!(columns = labels.len(), "emitted header row");

                self.summary.columns = labels.len();
                self.header = Some(labels);
                fields.iter().map(|f| f.value).collect()
            }
        };

        writeln!(self.writer, "{}", values.join(self.delimiter.as_str()))?;
        self.summary.blocks += 1;
        Ok(())
    }

    /// Flush the writer and report totals
    pub fn finish(mut self) -> Result<EmitSummary> {
        self.writer.flush()?;
        Ok(self.summary)
    }
}

/// Fit a later block's values to the header according to `policy`.
/// Returns the values and whether the row differs from the header.
fn conform<'a>(
    block: &RecordBlock<'_>,
    header: &[String],
    fields: &[Field<'a>],
    policy: MismatchPolicy,
) -> Result<(Vec<&'a str>, bool)> {
    let mut values: Vec<&'a str> = fields.iter().map(|f| f.value).collect();

    let matches = fields.len() == header.len()
        && fields.iter().zip(header).all(|(field, label)| field.label == label.as_str());
    if matches {
        return Ok((values, false));
    }

    match policy {
        MismatchPolicy::Strict if fields.is_empty() => Err(ConvertError::EmptyBlock {
            position: block.position(),
            marker: block.marker.to_string(),
        }),
        MismatchPolicy::Strict => Err(ConvertError::FieldMismatch {
            position: block.position(),
            marker: block.marker.to_string(),
            expected: header.join(", "),
            found: fields.iter().map(|f| f.label).collect::<Vec<_>>().join(", "),
        }),
        MismatchPolicy::Pad => {
            warn!(
                block = block.position(),
                marker = block.marker,
                found = fields.len(),
                expected = header.len(),
                "fitting block to header width"
            );
            values.resize(header.len(), "");
            Ok((values, true))
        }
        MismatchPolicy::Loose => {
            warn!(
                block = block.position(),
                marker = block.marker,
                found = fields.len(),
                expected = header.len(),
                "block fields differ from header"
            );
            Ok((values, true))
        }
    }
}

/// Convert report text to CSV, writing to `writer`.
///
/// Produces no output when the document has no blocks.
pub fn convert_to_csv<W: Write>(text: &str, config: &ConvertConfig, writer: W) -> Result<EmitSummary> {
    config.validate()?;

    let cleaned = CommentStripper::new(config.comment_marker)?.strip(text);
    let mut emitter = CsvEmitter::new(writer, config);
    for block in record_blocks(&cleaned) {
        emitter.emit_block(&block)?;
    }

    let summary = emitter.finish()?;
    info!(blocks = summary.blocks, columns = summary.columns, adjusted = summary.adjusted, "csv conversion complete");
    Ok(summary)
}
