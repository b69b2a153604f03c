//! Command-line interface module

use clap::{Parser, ValueEnum};
use console::style;
use std::path::PathBuf;

use crate::conversion::{ConversionConfig, SeparatorType};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "csvconv")]
#[command(about = "Convert CSV files to JSON with a streaming row pipeline")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Input CSV file to convert
    #[arg()]
    pub input: PathBuf,

    /// Column separator used by the input file
    #[arg(long, value_enum, default_value = "comma")]
    pub separator: Separator,

    /// Generate indented, human-readable JSON
    #[arg(long)]
    pub pretty: bool,

    /// Output file path (default: input path with a .json extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a conversion summary after success
    #[arg(long)]
    pub stats: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Separator values for the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    #[value(name = "comma", alias = ",")]
    Comma,
    #[value(name = "semicolon", alias = ";")]
    Semicolon,
}

impl From<Separator> for SeparatorType {
    fn from(separator: Separator) -> Self {
        match separator {
            Separator::Comma => SeparatorType::Comma,
            Separator::Semicolon => SeparatorType::Semicolon,
        }
    }
}

impl Args {
    /// Resolve CLI flags into the immutable pipeline configuration
    pub fn to_config(&self) -> ConversionConfig {
        let mut config = ConversionConfig::new(&self.input)
            .with_separator(self.separator.into())
            .with_pretty(self.pretty);
        if let Some(output) = &self.output {
            config = config.with_output_path(output);
        }
        config
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }
}
