//! Core functionality for repconv
//!
//! This crate contains the conversion logic for `> rep N` report files:
//! comment stripping, record-block and field extraction, CSV emission and
//! the single-header structure pass-through.

pub mod config;
pub mod emit;
pub mod error;
pub mod model;
pub mod parser;


pub use config::{ConvertConfig, MismatchPolicy};
pub use emit::{convert_structure, convert_to_csv};
pub use error::{ConvertError, Result};
pub use model::{EmitSummary, Field, RecordBlock, StructureSummary};
