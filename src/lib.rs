//! CSV to JSON Converter
//!
//! A Rust CLI tool for converting delimited text files (comma or semicolon
//! separated) to JSON, streaming row by row through a bounded
//! producer/writer pipeline instead of materializing the whole file in
//! memory.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod parser;
pub mod serializer;
pub mod validation;

// Re-export commonly used types
pub use conversion::{convert_file, ConversionConfig, ConversionSummary, SeparatorType};
pub use error::{ConvertError, ConvertResult};
pub use parser::{parse_row, Record};
pub use serializer::JsonArrayWriter;

use std::path::PathBuf;

/// Convert a CSV file to JSON with default configuration
pub fn convert(input: impl Into<PathBuf>) -> ConvertResult<ConversionSummary> {
    convert_file(&ConversionConfig::new(input))
}
