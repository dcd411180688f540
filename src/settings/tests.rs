//! Tests for the settings module.

use super::*;
use chrono::NaiveDate;

// ==================== Type inference tests ====================

#[test]
fn test_infer_integer() {
    assert_eq!(TypedValue::infer("42"), TypedValue::Integer(42));
}

#[test]
fn test_infer_negative_integer() {
    assert_eq!(TypedValue::infer("-17"), TypedValue::Integer(-17));
}

#[test]
fn test_infer_plus_signed_integer() {
    assert_eq!(TypedValue::infer("+7"), TypedValue::Integer(7));
}

#[test]
fn test_infer_integer_never_float() {
    // "42" is valid for both parsers; the narrower type must win.
    let value = TypedValue::infer("42");
    assert!(value.as_integer().is_some());
    assert!(value.as_float().is_none());
}

#[test]
fn test_infer_boolean_true() {
    assert_eq!(TypedValue::infer("true"), TypedValue::Boolean(true));
}

#[test]
fn test_infer_boolean_false() {
    assert_eq!(TypedValue::infer("false"), TypedValue::Boolean(false));
}

#[test]
fn test_infer_boolean_case_insensitive() {
    assert_eq!(TypedValue::infer("TRUE"), TypedValue::Boolean(true));
    assert_eq!(TypedValue::infer("False"), TypedValue::Boolean(false));
}

#[test]
fn test_infer_boolean_no_numeric_aliases() {
    // "1"/"0" and "yes"/"no" are not boolean literals.
    assert_eq!(TypedValue::infer("1"), TypedValue::Integer(1));
    assert_eq!(TypedValue::infer("yes"), TypedValue::Text("yes".to_string()));
}

#[test]
fn test_infer_float() {
    assert_eq!(TypedValue::infer("3.14"), TypedValue::Float(3.14));
}

#[test]
fn test_infer_negative_float() {
    assert_eq!(TypedValue::infer("-0.5"), TypedValue::Float(-0.5));
}

#[test]
fn test_infer_float_exponent() {
    assert_eq!(TypedValue::infer("1e3"), TypedValue::Float(1000.0));
}

#[test]
fn test_infer_integer_overflow_becomes_float() {
    // Too large for i64, still a valid number.
    let value = TypedValue::infer("99999999999999999999");
    assert!(value.as_float().is_some());
}

#[test]
fn test_infer_inf_is_text() {
    // f64::from_str accepts "inf" but a setting spelling it out is text.
    assert_eq!(TypedValue::infer("inf"), TypedValue::Text("inf".to_string()));
}

#[test]
fn test_infer_nan_is_text() {
    assert_eq!(TypedValue::infer("NaN"), TypedValue::Text("NaN".to_string()));
}

#[test]
fn test_infer_date_only() {
    let expected = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(TypedValue::infer("2023-01-01"), TypedValue::Timestamp(expected));
}

#[test]
fn test_infer_datetime() {
    let expected = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap();
    assert_eq!(
        TypedValue::infer("2023-01-01 12:30:00"),
        TypedValue::Timestamp(expected)
    );
}

#[test]
fn test_infer_rfc3339() {
    let expected = NaiveDate::from_ymd_opt(2023, 6, 15)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    assert_eq!(
        TypedValue::infer("2023-06-15T08:00:00Z"),
        TypedValue::Timestamp(expected)
    );
}

#[test]
fn test_infer_day_first_date() {
    let expected = NaiveDate::from_ymd_opt(2023, 12, 25)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(TypedValue::infer("25/12/2023"), TypedValue::Timestamp(expected));
}

#[test]
fn test_infer_invalid_date_is_text() {
    assert_eq!(
        TypedValue::infer("2023-13-40"),
        TypedValue::Text("2023-13-40".to_string())
    );
}

#[test]
fn test_infer_text_fallback() {
    assert_eq!(TypedValue::infer("hello"), TypedValue::Text("hello".to_string()));
}

#[test]
fn test_infer_empty_string_is_text() {
    assert_eq!(TypedValue::infer(""), TypedValue::Text(String::new()));
}

#[test]
fn test_infer_trims_for_probes_only() {
    // Whitespace is ignored when probing scalars but preserved in the
    // text fallback.
    assert_eq!(TypedValue::infer("  42  "), TypedValue::Integer(42));
    assert_eq!(
        TypedValue::infer("  hi  "),
        TypedValue::Text("  hi  ".to_string())
    );
}

#[test]
fn test_type_names() {
    assert_eq!(TypedValue::infer("1").type_name(), "integer");
    assert_eq!(TypedValue::infer("true").type_name(), "boolean");
    assert_eq!(TypedValue::infer("1.5").type_name(), "float");
    assert_eq!(TypedValue::infer("2023-01-01").type_name(), "timestamp");
    assert_eq!(TypedValue::infer("abc").type_name(), "text");
}

// ==================== Table load tests ====================

fn batch(entries: &[(&str, &str)]) -> Vec<Setting> {
    entries
        .iter()
        .map(|(name, value)| Setting::new(*name, *value))
        .collect()
}

#[test]
fn test_load_end_to_end() {
    let mut table = ConfigTable::new();
    let report = table.load(batch(&[
        ("MaxPlayers", "32"),
        ("Debug", "true"),
        ("Rate", "1.5"),
        ("StartDate", "2023-01-01"),
        ("Label", "hello"),
    ]));

    assert_eq!(report.loaded, 5);
    assert!(!report.has_duplicates());

    assert_eq!(table.integer("MaxPlayers"), Some(32));
    assert_eq!(table.boolean("Debug"), Some(true));
    assert_eq!(table.float("Rate"), Some(1.5));
    assert_eq!(
        table.timestamp("StartDate"),
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(0, 0, 0)
    );
    assert_eq!(table.text("Label"), Some("hello"));
}

#[test]
fn test_load_duplicate_first_wins() {
    let mut table = ConfigTable::new();
    let report = table.load(batch(&[("Foo", "1"), ("Foo", "2")]));

    assert_eq!(table.integer("Foo"), Some(1));
    assert_eq!(report.duplicates, vec!["Foo".to_string()]);
    assert_eq!(report.loaded, 1);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_load_no_duplicates_empty_report() {
    let mut table = ConfigTable::new();
    let report = table.load(batch(&[("A", "1"), ("B", "2")]));

    assert!(!report.has_duplicates());
    assert_eq!(report.loaded, 2);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_load_clears_previous_contents() {
    let mut table = ConfigTable::new();
    table.load(batch(&[("A", "1")]));
    table.load(batch(&[("B", "2")]));

    assert!(table.get("A").is_none());
    assert_eq!(table.integer("B"), Some(2));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_load_case_sensitive_keys() {
    let mut table = ConfigTable::new();
    let report = table.load(batch(&[("Foo", "1"), ("foo", "2")]));

    assert!(!report.has_duplicates());
    assert_eq!(table.integer("Foo"), Some(1));
    assert_eq!(table.integer("foo"), Some(2));
}

#[test]
fn test_load_empty_batch() {
    let mut table = ConfigTable::new();
    let report = table.load(Vec::new());

    assert_eq!(report.loaded, 0);
    assert!(table.is_empty());
}

#[test]
fn test_typed_getters_reject_wrong_type() {
    let mut table = ConfigTable::new();
    table.load(batch(&[("Label", "hello")]));

    assert_eq!(table.integer("Label"), None);
    assert_eq!(table.boolean("Label"), None);
    assert_eq!(table.float("Label"), None);
    assert_eq!(table.timestamp("Label"), None);
    assert_eq!(table.text("Label"), Some("hello"));
}

#[test]
fn test_getters_missing_key() {
    let table = ConfigTable::new();
    assert!(table.get("Missing").is_none());
    assert_eq!(table.integer("Missing"), None);
}

#[test]
fn test_to_json_snapshot() {
    let mut table = ConfigTable::new();
    table.load(batch(&[("MaxPlayers", "32"), ("Debug", "true")]));

    let json = table.to_json();
    assert_eq!(json["MaxPlayers"], 32);
    assert_eq!(json["Debug"], true);
}
