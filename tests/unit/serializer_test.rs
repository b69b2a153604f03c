use csvconv::parser::Record;
use csvconv::serializer::JsonArrayWriter;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::sync::mpsc::sync_channel;
use std::thread;

fn record(pairs: &[(&str, &str)]) -> Record {
    let mut record = Record::new();
    for (key, value) in pairs {
        record.insert(key.to_string(), Value::String(value.to_string()));
    }
    record
}

fn serialize(records: Vec<Record>, pretty: bool) -> String {
    let (tx, rx) = sync_channel::<Record>(4);
    let sender = thread::spawn(move || {
        for record in records {
            tx.send(record).unwrap();
        }
    });

    let mut buf = Vec::new();
    JsonArrayWriter::new(&mut buf, pretty, 2)
        .write_all(rx)
        .unwrap();
    sender.join().unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_order_preserved_across_many_records() {
    let records: Vec<Record> = (0..100)
        .map(|i| record(&[("seq", &i.to_string())]))
        .collect();

    let output = serialize(records, false);
    let parsed: Vec<Value> = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed.len(), 100);
    for (i, element) in parsed.iter().enumerate() {
        assert_eq!(element["seq"], Value::String(i.to_string()));
    }
}

#[test]
fn test_special_characters_are_escaped() {
    let output = serialize(
        vec![record(&[("quote", "say \"hi\""), ("path", "a\\b")])],
        false,
    );

    assert_eq!(output, r#"[{"quote":"say \"hi\"","path":"a\\b"}]"#);
    let parsed: Vec<Value> = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed[0]["quote"], Value::String("say \"hi\"".to_string()));
}

#[test]
fn test_pretty_indents_one_key_per_line() {
    let output = serialize(vec![record(&[("id", "1"), ("name", "ana")])], true);

    let expected = "[\n  {\n    \"id\": \"1\",\n    \"name\": \"ana\"\n  }\n]";
    assert_eq!(output, expected);
}

#[test]
fn test_both_modes_agree_on_empty_input() {
    assert_eq!(serialize(vec![], false), "[]");
    assert_eq!(serialize(vec![], true), "[]");
}

#[test]
fn test_numeric_looking_values_stay_strings() {
    let output = serialize(vec![record(&[("age", "25"), ("score", "3.14")])], false);
    assert_eq!(output, r#"[{"age":"25","score":"3.14"}]"#);
}
