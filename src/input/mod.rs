//! Input side of the converter.
//!
//! - [`csv`] - Record Extractor: decode, normalize, filter

mod csv;

pub use self::csv::{extract, extract_from_reader};
