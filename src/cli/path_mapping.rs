use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Map an input CSV file to its JSON output path: same directory, same base
/// name, extension replaced.
pub fn json_output_path(input: &Path) -> PathBuf {
    let mut out = input.to_path_buf();
    out.set_extension("json");
    out
}

/// Staging file the writer streams into before the atomic rename onto
/// `output`.
pub fn staging_output_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output.json"));
    name.push(".tmp");
    output.with_file_name(name)
}
