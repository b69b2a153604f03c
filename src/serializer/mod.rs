//! Writer side of the conversion pipeline: drains the hand-off channel and
//! serializes records incrementally into a JSON array.

use std::io::Write;
use std::sync::mpsc::Receiver;

use serde::Serialize;

use crate::error::{ConvertError, ConvertResult};
use crate::parser::Record;

/// Streams records into a growing JSON array on `out`.
///
/// The array is written incrementally, one object per received record, so
/// the full document never lives in memory. Compact mode emits no
/// insignificant whitespace; pretty mode indents one key per line. Both
/// parse back to the same sequence of objects.
pub struct JsonArrayWriter<W: Write> {
    out: W,
    pretty: bool,
    indent: String,
}

impl<W: Write> JsonArrayWriter<W> {
    pub fn new(out: W, pretty: bool, indent_size: u8) -> Self {
        Self {
            out,
            pretty,
            indent: " ".repeat(indent_size as usize),
        }
    }

    /// Drain the channel and write the complete array.
    ///
    /// Returns the number of records written, and returns only after the
    /// closing bracket has been flushed; the return is the completion
    /// signal the orchestrator waits on. Zero received records still
    /// produce a valid empty array.
    pub fn write_all(mut self, records: Receiver<Record>) -> ConvertResult<usize> {
        self.write_str("[")?;

        let mut written = 0usize;
        for record in records {
            self.write_record(&record, written == 0)?;
            written += 1;
        }

        if self.pretty && written > 0 {
            self.write_str("\n")?;
        }
        self.write_str("]")?;

        self.out
            .flush()
            .map_err(|e| ConvertError::io(format!("flush failure: {}", e), None))?;
        Ok(written)
    }

    fn write_record(&mut self, record: &Record, first: bool) -> ConvertResult<()> {
        if self.pretty {
            let separator = if first { "\n" } else { ",\n" };
            self.write_str(separator)?;
            let rendered = self.render_pretty(record)?;
            self.write_str(&rendered)?;
        } else {
            if !first {
                self.write_str(",")?;
            }
            serde_json::to_writer(&mut self.out, record)?;
        }
        Ok(())
    }

    /// Render one record indented one level into the surrounding array
    fn render_pretty(&self, record: &Record) -> ConvertResult<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        record.serialize(&mut serializer)?;

        let rendered = String::from_utf8(buf)
            .map_err(|e| ConvertError::io(format!("invalid UTF-8 in output: {}", e), None))?;

        let indented: Vec<String> = rendered
            .lines()
            .map(|line| format!("{}{}", self.indent, line))
            .collect();
        Ok(indented.join("\n"))
    }

    fn write_str(&mut self, s: &str) -> ConvertResult<()> {
        self.out
            .write_all(s.as_bytes())
            .map_err(|e| ConvertError::io(format!("write failure: {}", e), None))
    }
}
