//! Configuration options for CSV to JSON conversion

use std::path::PathBuf;

use crate::cli::path_mapping::json_output_path;

/// Column separator options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorType {
    /// Comma separator (,)
    #[default]
    Comma,
    /// Semicolon separator (;)
    Semicolon,
}

impl SeparatorType {
    /// Separator as the single byte the CSV reader expects
    pub fn as_byte(&self) -> u8 {
        match self {
            SeparatorType::Comma => b',',
            SeparatorType::Semicolon => b';',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeparatorType::Comma => "comma",
            SeparatorType::Semicolon => "semicolon",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "comma" | "," => Ok(SeparatorType::Comma),
            "semicolon" | ";" => Ok(SeparatorType::Semicolon),
            other => Err(format!(
                "Invalid separator '{}'. Use 'comma' or 'semicolon'",
                other
            )),
        }
    }
}

/// Conversion configuration options.
///
/// Built once before the pipeline starts and shared read-only with the
/// producer and writer; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Input CSV file
    pub input_path: PathBuf,
    /// Explicit output path; derived from the input path when `None`
    pub output_path: Option<PathBuf>,
    /// Column separator
    pub separator: SeparatorType,
    /// Pretty-print output (vs compact)
    pub pretty: bool,
    /// Spaces per indentation level in pretty mode (0-8)
    pub indent_size: u8,
    /// Bound of the record hand-off channel between producer and writer
    pub channel_capacity: usize,
}

impl ConversionConfig {
    /// Create a configuration for an input file with default options
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: None,
            separator: SeparatorType::Comma,
            pretty: false,
            indent_size: 2,
            channel_capacity: 16,
        }
    }

    /// Set the column separator
    pub fn with_separator(mut self, separator: SeparatorType) -> Self {
        self.separator = separator;
        self
    }

    /// Enable/disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Override the derived output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Set indentation size for pretty mode
    pub fn with_indent_size(mut self, size: u8) -> Self {
        self.indent_size = size;
        self
    }

    /// Set the hand-off channel bound
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    /// The output path this conversion writes to: the explicit override, or
    /// the input path with its extension replaced by `.json`
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => json_output_path(&self.input_path),
        }
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }

        if self.input_path.as_os_str().is_empty() {
            return Err("Input path must not be empty".to_string());
        }

        Ok(())
    }
}
