//! Core conversion engine: owns the output resource and wires the producer
//! and writer threads around the bounded hand-off channel.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::mpsc::sync_channel;
use std::thread;
use std::time::Instant;

use crate::cli::path_mapping::staging_output_path;
use crate::conversion::ConversionConfig;
use crate::error::{ConvertError, ConvertResult};
use crate::parser::producer::{CsvProducer, ProducerReport};
use crate::parser::Record;
use crate::serializer::JsonArrayWriter;

/// Outcome of a completed conversion
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub rows_converted: usize,
    pub rows_skipped: usize,
    pub output_size: u64,
    pub processing_time_ms: u64,
    pub output_path: PathBuf,
}

/// Convert the configured CSV file into a JSON array file.
///
/// The output is written to a staging file next to the final path and
/// renamed into place only after both workers finished cleanly, so a failed
/// run never leaves a half-written file at the destination.
pub fn convert_file(config: &ConversionConfig) -> ConvertResult<ConversionSummary> {
    config.validate().map_err(ConvertError::configuration)?;

    let start = Instant::now();
    let output_path = config.resolved_output_path();
    let staging_path = staging_output_path(&output_path);

    let out_file = File::create(&staging_path).map_err(|e| {
        ConvertError::io(
            format!("cannot create output: {}", e),
            Some(staging_path.clone()),
        )
    })?;

    let outcome = run_pipeline(config, out_file).and_then(|counts| {
        fs::rename(&staging_path, &output_path).map_err(|e| {
            ConvertError::io(
                format!("cannot finalize output: {}", e),
                Some(output_path.clone()),
            )
        })?;
        Ok(counts)
    });

    match outcome {
        Ok((rows_converted, report)) => {
            let output_size = fs::metadata(&output_path).map(|m| m.len()).unwrap_or(0);
            Ok(ConversionSummary {
                rows_converted,
                rows_skipped: report.rows_skipped,
                output_size,
                processing_time_ms: start.elapsed().as_millis() as u64,
                output_path,
            })
        }
        Err(err) => {
            let _ = fs::remove_file(&staging_path);
            Err(err)
        }
    }
}

/// Start both workers and wait for them, writer first.
///
/// The workers share nothing but the bounded channel; each returns a
/// `Result` instead of terminating the process, so the decision about what
/// a failure means stays here.
fn run_pipeline(config: &ConversionConfig, out_file: File) -> ConvertResult<(usize, ProducerReport)> {
    let (tx, rx) = sync_channel::<Record>(config.channel_capacity);

    let producer_config = config.clone();
    let producer = thread::Builder::new()
        .name("csv-producer".into())
        .spawn(move || CsvProducer::new(producer_config).run(tx))
        .map_err(|e| ConvertError::io(format!("cannot spawn producer thread: {}", e), None))?;

    let pretty = config.pretty;
    let indent_size = config.indent_size;
    let writer = thread::Builder::new()
        .name("json-writer".into())
        .spawn(move || {
            JsonArrayWriter::new(BufWriter::new(out_file), pretty, indent_size).write_all(rx)
        })
        .map_err(|e| ConvertError::io(format!("cannot spawn writer thread: {}", e), None))?;

    // The writer returning is the completion signal: the closing bracket is
    // already flushed when its result becomes visible here.
    let written = join_worker(writer, "writer");
    let produced = join_worker(producer, "producer");

    // The writer owns the output, so its failure wins over the producer's.
    let rows_converted = written?;
    let report = produced?;
    Ok((rows_converted, report))
}

fn join_worker<T>(handle: thread::JoinHandle<ConvertResult<T>>, name: &str) -> ConvertResult<T> {
    handle
        .join()
        .map_err(|_| ConvertError::io(format!("{} thread panicked", name), None))?
}
