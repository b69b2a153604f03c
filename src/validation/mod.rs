//! Input validation module
//!
//! Thin pre-flight checks on the input path; everything here runs before
//! the conversion pipeline starts.

use std::path::Path;

use crate::error::{ConvertError, ConvertResult};

/// Check that the input path points at an existing `.csv` file.
pub fn check_input_file(path: &Path) -> ConvertResult<()> {
    match path.extension() {
        Some(ext) if ext == "csv" => {}
        _ => {
            return Err(ConvertError::validation(
                "not a CSV file",
                Some(path.to_path_buf()),
            ))
        }
    }

    if !path.is_file() {
        return Err(ConvertError::validation(
            "file does not exist",
            Some(path.to_path_buf()),
        ));
    }

    Ok(())
}
