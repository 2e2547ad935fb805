//! Report text parsing
//!
//! Turns raw report text into record blocks and their fields: comments are
//! stripped first, then `> rep N` blocks are located and each block body is
//! scanned for `** Label` / value pairs.

pub mod blocks;
pub mod comments;
pub mod fields;

pub use blocks::{RecordBlocks, record_blocks};
pub use comments::{CommentStripper, strip_comments};
pub use fields::extract_fields;
