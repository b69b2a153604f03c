use anyhow::{anyhow, Result};
use clap::Parser;

use csvconv::cli::{Args, CliUtils};
use csvconv::conversion::{convert_file, ConversionSummary};
use csvconv::error::ConvertResult;
use csvconv::validation::check_input_file;

fn main() -> Result<()> {
    let args = Args::parse();
    run(&args).map_err(|err| anyhow!("{}", err.user_message()))
}

fn run(args: &Args) -> ConvertResult<()> {
    check_input_file(&args.input)?;

    let config = args.to_config();
    let summary = convert_file(&config)?;

    CliUtils::show_success(
        &format!("Converted to: {}", summary.output_path.display()),
        args.quiet,
    );

    if args.stats {
        output_statistics(&summary, args.quiet);
    }

    Ok(())
}

fn output_statistics(summary: &ConversionSummary, quiet: bool) {
    if quiet {
        return;
    }

    println!("\nConversion Statistics:");
    println!("Rows converted: {}", summary.rows_converted);
    println!("Rows skipped: {}", summary.rows_skipped);
    println!(
        "Output size: {}",
        CliUtils::format_file_size(summary.output_size)
    );
    println!("Processing time: {}ms", summary.processing_time_ms);
}
