//! Output stages: CSV rows from record blocks, and single-header pass-through

pub mod csv;
pub mod structure;

pub use csv::{CsvEmitter, convert_to_csv};
pub use structure::{HeaderState, StructureConverter, convert_structure};
