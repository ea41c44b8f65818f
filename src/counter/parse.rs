//! Parse-and-validate boundary for the set-value field.
//!
//! User text is validated here, before any intent is built. Text that
//! does not name an `i64` never reaches the reducer; the caller keeps
//! the text on screen so it can be corrected.

use std::num::IntErrorKind;

use thiserror::Error;

/// Why a set-value request was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SetValueError {
    #[error("enter a number first")]
    Empty,

    #[error("'{0}' is not an integer")]
    NotANumber(String),

    #[error("{0} is out of range")]
    OutOfRange(String),
}

/// Parse the uncommitted text of the set-value field.
///
/// Surrounding whitespace is ignored; an optional leading `+` or `-`
/// is accepted.
pub fn parse_set_value(raw: &str) -> Result<i64, SetValueError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(SetValueError::Empty);
    }

    text.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            SetValueError::OutOfRange(text.to_string())
        }
        _ => SetValueError::NotANumber(text.to_string()),
    })
}
