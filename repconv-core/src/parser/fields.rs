//! Field extraction within a record block

use tracing::debug;

use regex_utils::field;

use crate::model::Field;

/// Pair every `** Label` line with the line immediately after it.
///
/// The value line is taken as-is regardless of its content, so a marker
/// followed by another marker yields that marker line as the value. Lines
/// that are neither a label nor a consumed value are skipped. A label on
/// the last line has no value and is dropped.
pub fn extract_fields<'a>(lines: &[&'a str]) -> Vec<Field<'a>> {
    let mut fields = Vec::new();
    let mut lines = lines.iter().copied();

    while let Some(line) = lines.next() {
        let Some(label) = field::label(line) else {
            continue;
        };

        match lines.next() {
            Some(value) => fields.push(Field::new(label, value.trim())),
            None => debug!(label, "dropping field marker without a value line"),
        }
    }

    fields
}
