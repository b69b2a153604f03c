//! CSV row parsing module

pub mod producer;

use csv::StringRecord;
use serde_json::{Map, Value};

use crate::error::{ConvertError, ConvertResult};

/// One parsed data row: column name to field text, in header order.
///
/// `serde_json::Map` is built with `preserve_order`, so serializing a record
/// emits its keys exactly as they appeared in the header.
pub type Record = Map<String, Value>;

/// Pair a data row with the header, producing a [`Record`].
///
/// Every field value stays a JSON string; no numeric or boolean coercion.
/// Fails with [`ConvertError::SchemaMismatch`] when the field counts
/// disagree. Pure function, no I/O.
pub fn parse_row(header: &StringRecord, row: &StringRecord) -> ConvertResult<Record> {
    if row.len() != header.len() {
        return Err(ConvertError::schema_mismatch(
            header.len(),
            row.len(),
            row.iter().map(str::to_string).collect(),
        ));
    }

    let mut record = Record::new();
    for (name, value) in header.iter().zip(row.iter()) {
        record.insert(name.to_string(), Value::String(value.to_string()));
    }
    Ok(record)
}
