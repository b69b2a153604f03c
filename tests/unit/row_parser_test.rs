use assert_matches::assert_matches;
use csv::StringRecord;
use csvconv::error::ConvertError;
use csvconv::parser::parse_row;
use serde_json::Value;

fn string_record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

#[test]
fn test_wide_row_round_trips_every_column() {
    let names: Vec<String> = (0..40).map(|i| format!("col{}", i)).collect();
    let header = StringRecord::from(names.clone());
    let values: Vec<String> = (0..40).map(|i| format!("v{}", i)).collect();
    let row = StringRecord::from(values);

    let record = parse_row(&header, &row).unwrap();
    assert_eq!(record.len(), 40);
    assert_eq!(record["col17"], Value::String("v17".to_string()));
}

#[test]
fn test_empty_field_values_are_kept() {
    let header = string_record(&["id", "name", "note"]);
    let row = string_record(&["1", "", ""]);

    let record = parse_row(&header, &row).unwrap();
    assert_eq!(record["name"], Value::String(String::new()));
    assert_eq!(record["note"], Value::String(String::new()));
}

#[test]
fn test_unicode_fields_survive() {
    let header = string_record(&["name", "city"]);
    let row = string_record(&["Łukasz", "São Paulo"]);

    let record = parse_row(&header, &row).unwrap();
    assert_eq!(record["name"], Value::String("Łukasz".to_string()));
    assert_eq!(record["city"], Value::String("São Paulo".to_string()));
}

#[test]
fn test_duplicate_header_names_keep_last_value() {
    let header = string_record(&["id", "id"]);
    let row = string_record(&["1", "2"]);

    let record = parse_row(&header, &row).unwrap();
    assert_eq!(record.len(), 1);
    assert_eq!(record["id"], Value::String("2".to_string()));
}

#[test]
fn test_mismatch_error_carries_offending_row() {
    let header = string_record(&["a", "b", "c"]);
    let row = string_record(&["only", "two"]);

    let err = parse_row(&header, &row).unwrap_err();
    assert_matches!(err, ConvertError::SchemaMismatch { expected: 3, found: 2, row }
        if row == vec!["only".to_string(), "two".to_string()]);
}

#[test]
fn test_zero_width_row_against_real_header() {
    let header = string_record(&["a"]);
    let row = StringRecord::new();

    assert_matches!(
        parse_row(&header, &row),
        Err(ConvertError::SchemaMismatch { .. })
    );
}
