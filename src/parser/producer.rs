//! Producer side of the conversion pipeline: reads the input CSV and feeds
//! parsed records into the hand-off channel.

use std::fs::File;
use std::sync::mpsc::SyncSender;

use csv::ReaderBuilder;

use crate::conversion::ConversionConfig;
use crate::error::{ConvertError, ConvertResult};
use crate::parser::{parse_row, Record};

/// What the producer saw while draining the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProducerReport {
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Rows skipped because their width disagreed with the header
    pub rows_skipped: usize,
}

/// Reads the input file row by row and sends well-formed records downstream.
///
/// The producer is the only holder of the channel's sender; dropping it at
/// the end of `run` is the "no more records" signal the writer drains on.
pub struct CsvProducer {
    config: ConversionConfig,
}

impl CsvProducer {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Drive input consumption until end-of-input or a fatal read error.
    ///
    /// Rows whose width disagrees with the header are warned about and
    /// skipped; the stream continues. A failed send means the writer is
    /// gone, so reading stops and the writer's own error is the one the
    /// orchestrator reports.
    pub fn run(self, records: SyncSender<Record>) -> ConvertResult<ProducerReport> {
        let input_path = self.config.input_path.clone();
        let file = File::open(&input_path).map_err(|e| {
            ConvertError::io(format!("cannot open input: {}", e), Some(input_path.clone()))
        })?;

        // flexible(true) lets ragged rows through the reader so they surface
        // as row-scoped schema mismatches instead of reader errors
        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.separator.as_byte())
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut rows = reader.records();
        let header = match rows.next() {
            Some(Ok(header)) => header,
            Some(Err(e)) => {
                return Err(ConvertError::io(
                    format!("cannot read header row: {}", e),
                    Some(input_path),
                ))
            }
            None => {
                return Err(ConvertError::io(
                    "input is empty, expected a header row",
                    Some(input_path),
                ))
            }
        };

        let mut report = ProducerReport::default();
        for row in rows {
            let row = row.map_err(|e| {
                ConvertError::io(format!("read failure: {}", e), Some(input_path.clone()))
            })?;
            report.rows_read += 1;

            match parse_row(&header, &row) {
                Ok(record) => {
                    if records.send(record).is_err() {
                        // writer hung up; stop reading, its error wins
                        break;
                    }
                }
                Err(err) => {
                    report.rows_skipped += 1;
                    eprintln!("⚠ {}", err.user_message());
                }
            }
        }

        Ok(report)
    }
}
