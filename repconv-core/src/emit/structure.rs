//! Single-header pass-through conversion
//!
//! The first `** Label` line is replaced by its label; every other line,
//! including later marker lines, is written unchanged.

use std::io::Write;
use tracing::{debug, info};

use regex_utils::field;

use crate::config::ConvertConfig;
use crate::error::Result;
use crate::model::StructureSummary;
use crate::parser::CommentStripper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Pending,
    Emitted,
}

pub struct StructureConverter<W: Write> {
    writer: W,
    state: HeaderState,
    summary: StructureSummary,
}

impl<W: Write> StructureConverter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, state: HeaderState::Pending, summary: StructureSummary::default() }
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// Process one line, including its terminator if it has one
    pub fn process_line(&mut self, line: &str) -> Result<()> {
        if self.state == HeaderState::Pending {
            if let Some(label) = field::label(line) {
                let body_len = line.trim_end_matches(['\r', '\n']).len();
                let terminator = match &line[body_len..] {
                    "" => "\n",
                    ending => ending,
                };

                write!(self.writer, "{label}{terminator}")?;
                debug!(label, "emitted header");

                self.summary.header = Some(label.to_string());
                self.state = HeaderState::Emitted;
                return Ok(());
            }
        }

        self.writer.write_all(line.as_bytes())?;
        self.summary.lines += 1;
        Ok(())
    }

    /// Flush the writer and report totals
    pub fn finish(mut self) -> Result<StructureSummary> {
        self.writer.flush()?;
        Ok(self.summary)
    }
}

/// Convert report text with a single authoritative header
pub fn convert_structure<W: Write>(
    text: &str,
    config: &ConvertConfig,
    writer: W,
) -> Result<StructureSummary> {
    config.validate()?;

    let cleaned = CommentStripper::new(config.comment_marker)?.strip(text);
    let mut converter = StructureConverter::new(writer);
    for line in cleaned.split_inclusive('\n') {
        converter.process_line(line)?;
    }

    let summary = converter.finish()?;
    info!(header = summary.header.is_some(), lines = summary.lines, "structure conversion complete");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(text: &str) -> (String, StructureSummary) {
        let mut out = Vec::new();
        let summary = convert_structure(text, &ConvertConfig::default(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_only_first_header_replaced() {
        let (out, summary) = convert("** Title\nline1\n** Title2\nline2\n");

        assert_eq!(out, "Title\nline1\n** Title2\nline2\n");
        assert_eq!(summary.header.as_deref(), Some("Title"));
        assert_eq!(summary.lines, 3);
    }

    #[test]
    fn test_lines_before_header_pass_through() {
        let (out, _) = convert("preface\n** Names A B\nrow\n");
        assert_eq!(out, "preface\nNames A B\nrow\n");
    }

    #[test]
    fn test_no_header() {
        let (out, summary) = convert("a\nb");
        assert_eq!(out, "a\nb");
        assert_eq!(summary.header, None);
    }

    #[test]
    fn test_header_on_last_line_gets_newline() {
        let (out, _) = convert("body\n** End");
        assert_eq!(out, "body\nEnd\n");
    }

    #[test]
    fn test_crlf_preserved() {
        let (out, _) = convert("** T\r\nx\r\n");
        assert_eq!(out, "T\r\nx\r\n");
    }

    #[test]
    fn test_comments_stripped() {
        let (out, _) = convert("# generated\n** Title # main\nvalue # unit\n");
        assert_eq!(out, "Title\nvalue \n");
    }

    #[test]
    fn test_state_transition() {
        let mut out = Vec::new();
        let mut converter = StructureConverter::new(&mut out);
        assert_eq!(converter.state(), HeaderState::Pending);

        converter.process_line("plain\n").unwrap();
        assert_eq!(converter.state(), HeaderState::Pending);

        converter.process_line("** H\n").unwrap();
        assert_eq!(converter.state(), HeaderState::Emitted);

        converter.process_line("** H\n").unwrap();
        assert_eq!(converter.state(), HeaderState::Emitted);
    }
}
