//! Data model for report documents
//!
//! Everything here borrows from the cleaned document text and lives only for
//! a single conversion pass.

/// One repeated record, introduced by a `> rep N` marker line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBlock<'a> {
    /// Zero-based position in document order
    pub ordinal: usize,

    /// Identifier text from the marker line, e.g. `3` or `3.1`
    pub marker: &'a str,

    /// Body lines, without marker or separator lines
    pub lines: Vec<&'a str>,
}

impl<'a> RecordBlock<'a> {
    /// Whether this block supplies the header row
    pub fn is_first(&self) -> bool {
        self.ordinal == 0
    }

    /// One-based position, as reported in errors and logs
    pub fn position(&self) -> usize {
        self.ordinal + 1
    }

    /// Extract the ordered label/value pairs of this block
    pub fn fields(&self) -> Vec<Field<'a>> {
        crate::parser::fields::extract_fields(&self.lines)
    }
}

/// A label/value pair found within a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub label: &'a str,
    pub value: &'a str,
}

impl<'a> Field<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self { label, value }
    }
}

/// Totals reported once a CSV conversion finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Blocks written as data rows
    pub blocks: usize,

    /// Width of the header row
    pub columns: usize,

    /// Rows that were padded, truncated or emitted despite mismatched labels
    pub adjusted: usize,
}

/// Totals reported once a structure conversion finishes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureSummary {
    /// Header label, if a header line was found
    pub header: Option<String>,

    /// Lines passed through verbatim
    pub lines: usize,
}
