//! Repetition block extraction

use std::iter::{FusedIterator, Peekable};
use std::str::Lines;
use tracing::{debug, trace};

use regex_utils::block;

use crate::model::RecordBlock;

/// Lazy iterator over the record blocks of a cleaned document.
///
/// Text before the first `> rep N` marker is ignored. A block's body runs
/// until the next marker or end of input; other `>` lines are separators
/// and are left out of the body.
#[derive(Debug, Clone)]
pub struct RecordBlocks<'a> {
    lines: Peekable<Lines<'a>>,
    ordinal: usize,
}

impl<'a> RecordBlocks<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { lines: text.lines().peekable(), ordinal: 0 }
    }
}

impl<'a> Iterator for RecordBlocks<'a> {
    type Item = RecordBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let marker = loop {
            let line = self.lines.next()?;
            if let Some(id) = block::marker_id(line) {
                break id;
            }
            trace!(line, "skipping text outside any block");
        };

        let mut lines = Vec::new();
        while let Some(line) = self.lines.next_if(|line| block::marker_id(line).is_none()) {
            if block::is_separator(line) {
                trace!(line, "skipping separator");
                continue;
            }
            lines.push(line);
        }

        let ordinal = self.ordinal;
        self.ordinal += 1;
        debug!(ordinal, marker, lines = lines.len(), "found record block");

        Some(RecordBlock { ordinal, marker, lines })
    }
}

impl FusedIterator for RecordBlocks<'_> {}

/// Iterate the record blocks of `text` in document order
pub fn record_blocks(text: &str) -> RecordBlocks<'_> {
    RecordBlocks::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_in_order() {
        let text = "> rep 1\n** A\nx1\n> rep 2\n** A\nx2\n";
        let blocks: Vec<_> = record_blocks(text).collect();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].marker, "1");
        assert_eq!(blocks[0].lines, vec!["** A", "x1"]);
        assert!(blocks[0].is_first());
        assert_eq!(blocks[1].ordinal, 1);
        assert_eq!(blocks[1].position(), 2);
        assert_eq!(blocks[1].lines, vec!["** A", "x2"]);
    }

    #[test]
    fn test_no_blocks() {
        assert_eq!(record_blocks("").count(), 0);
        assert_eq!(record_blocks("** A\nx1\n").count(), 0);
    }

    #[test]
    fn test_preamble_and_separators_excluded() {
        let text = "title line\n> rep 3.1\n** A\n> ----\nx1\n>\n";
        let blocks: Vec<_> = record_blocks(text).collect();

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].marker, "3.1");
        assert_eq!(blocks[0].lines, vec!["** A", "x1"]);
    }

    #[test]
    fn test_dash_lines_are_separators() {
        let text = "> rep 1\n** A\nx\n** B\n--\n> rep 2\n** Delta\n-3.5\n";
        let blocks: Vec<_> = record_blocks(text).collect();

        assert_eq!(blocks[0].lines, vec!["** A", "x", "** B"]);
        // Negative values are data, not separators
        assert_eq!(blocks[1].lines, vec!["** Delta", "-3.5"]);
    }

    #[test]
    fn test_empty_and_adjacent_blocks() {
        let text = "> rep 1\n> rep 2\n** B\ny\n";
        let blocks: Vec<_> = record_blocks(text).collect();

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].lines.is_empty());
        assert_eq!(blocks[1].lines, vec!["** B", "y"]);
    }

    #[test]
    fn test_crlf_input() {
        let text = "> rep 1\r\n** A\r\nx1\r\n";
        let blocks: Vec<_> = record_blocks(text).collect();
        assert_eq!(blocks[0].lines, vec!["** A", "x1"]);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut blocks = record_blocks("> rep 1\n");
        assert!(blocks.next().is_some());
        assert!(blocks.next().is_none());
        assert!(blocks.next().is_none());
    }
}
