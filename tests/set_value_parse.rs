//! Boundary tests for the set-value input.
//!
//! Policy under test: text that does not name an integer is rejected
//! with a typed error and never becomes counter state. There is no
//! silent coercion path.

use tally::counter::{parse_set_value, SetValueError};

#[test]
fn accepts_plain_and_signed_integers() {
    assert_eq!(parse_set_value("0"), Ok(0));
    assert_eq!(parse_set_value("42"), Ok(42));
    assert_eq!(parse_set_value("-42"), Ok(-42));
    assert_eq!(parse_set_value("+42"), Ok(42));
}

#[test]
fn trims_whitespace() {
    assert_eq!(parse_set_value("\t 42 \n"), Ok(42));
}

#[test]
fn rejects_non_numeric_text() {
    assert_eq!(
        parse_set_value("abc"),
        Err(SetValueError::NotANumber("abc".to_string()))
    );
    assert_eq!(
        parse_set_value("12abc"),
        Err(SetValueError::NotANumber("12abc".to_string()))
    );
}

#[test]
fn rejects_empty_and_blank() {
    assert_eq!(parse_set_value(""), Err(SetValueError::Empty));
    assert_eq!(parse_set_value("  "), Err(SetValueError::Empty));
}

#[test]
fn rejects_floats_and_separators() {
    assert!(matches!(
        parse_set_value("3.14"),
        Err(SetValueError::NotANumber(_))
    ));
    assert!(matches!(
        parse_set_value("1_000"),
        Err(SetValueError::NotANumber(_))
    ));
    assert!(matches!(
        parse_set_value("1,000"),
        Err(SetValueError::NotANumber(_))
    ));
}

#[test]
fn rejects_values_beyond_i64() {
    assert!(matches!(
        parse_set_value("9223372036854775808"),
        Err(SetValueError::OutOfRange(_))
    ));
    assert!(matches!(
        parse_set_value("-9223372036854775809"),
        Err(SetValueError::OutOfRange(_))
    ));
}

#[test]
fn error_messages_are_presentable() {
    let err = parse_set_value("abc").unwrap_err();
    assert_eq!(err.to_string(), "'abc' is not an integer");

    let err = parse_set_value("").unwrap_err();
    assert_eq!(err.to_string(), "enter a number first");
}
