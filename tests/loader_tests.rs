use alu_quote::error::QuoteError;
use alu_quote::quote::FinishType;
use alu_quote::rates::RawRates;
use std::io::{Cursor, Write};
use tempfile::Builder;

mod common;
use common::resolver;

const STORE_CSV: &str = "\
key,value,label
alu_color,410,Aluminum Color (Rs/kg)
alu_silver, 360 ,Aluminum Silver (Rs/kg)
glass,45,Glass (Rs/sqft)
glass_rubber,10
mosquito_net,20,Mosquito Net (Rs/sqft)
labour_min,350,Minimum Labour
labour_sqft,24,Labour (Rs/sqft)
";

#[test]
fn test_csv_store_resolves() {
    let raw = RawRates::from_csv_reader(Cursor::new(STORE_CSV)).unwrap();
    assert_eq!(raw.len(), 7);
    assert_eq!(raw.get("alu_silver"), Some(360.0));

    let table = resolver().resolve(&raw, FinishType::Color).unwrap();
    assert_eq!(table.glass_rubber, 10.0);
    assert_eq!(table.defaulted.len(), 4);
}

#[test]
fn test_csv_short_rows_are_skipped() {
    let csv = "key,value\nglass,45\nlonely\n,12\nlock,170\n";
    let raw = RawRates::from_csv_reader(Cursor::new(csv)).unwrap();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw.get("lock"), Some(170.0));
}

#[test]
fn test_csv_bad_value_names_the_row() {
    let csv = "key,value\nglass,45\nlock,cheap\n";
    let err = RawRates::from_csv_reader(Cursor::new(csv)).unwrap_err();
    match err {
        QuoteError::RateSource(msg) => {
            assert!(msg.contains("row 3"), "{msg}");
            assert!(msg.contains("lock"), "{msg}");
        }
        other => panic!("expected RateSource, got {other:?}"),
    }
}

#[test]
fn test_json_store_loads() {
    let json = r#"{ "alu_color": 410, "screw": 70.5 }"#;
    let raw = RawRates::from_json_reader(Cursor::new(json)).unwrap();
    assert_eq!(raw.get("alu_color"), Some(410.0));
    assert_eq!(raw.get("screw"), Some(70.5));
}

#[test]
fn test_json_non_numeric_value_is_error() {
    let json = r#"{ "alu_color": "lots" }"#;
    assert!(matches!(
        RawRates::from_json_reader(Cursor::new(json)),
        Err(QuoteError::Json(_))
    ));
}

#[test]
fn test_load_from_file_picks_format_by_extension() {
    let mut csv = Builder::new().suffix(".csv").tempfile().unwrap();
    csv.write_all(STORE_CSV.as_bytes()).unwrap();
    assert_eq!(RawRates::load_from_file(csv.path()).unwrap().len(), 7);

    let mut json = Builder::new().suffix(".JSON").tempfile().unwrap();
    json.write_all(br#"{"glass": 45}"#).unwrap();
    assert_eq!(RawRates::load_from_file(json.path()).unwrap().get("glass"), Some(45.0));
}

#[test]
fn test_load_from_file_rejects_unknown_extension() {
    let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"glass=45").unwrap();
    let err = RawRates::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, QuoteError::RateSource(_)));
}

#[test]
fn test_collecting_pairs_builds_a_store() {
    let raw: RawRates = vec![("glass", 45.0), ("lock", 170.0)].into_iter().collect();
    assert_eq!(raw.keys().collect::<Vec<_>>(), ["glass", "lock"]);
}
