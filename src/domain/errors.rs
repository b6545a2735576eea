//! Domain validation errors.

use super::field::FieldKind;
use std::fmt;

/// Errors that can occur during field and record validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A name or email was given an empty value.
    EmptyValue(FieldKind),

    /// The provided phone number is not exactly 12 digits.
    InvalidPhone(String),

    /// The provided birthday is not a valid DD.MM.YYYY date.
    InvalidBirthday(String),

    /// A field of one kind was passed where another kind was expected.
    KindMismatch {
        expected: FieldKind,
        found: FieldKind,
    },

    /// The value already exists on the record.
    Duplicate { kind: FieldKind, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue(kind) => write!(f, "{} cannot be empty", kind),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidBirthday(date) => write!(f, "Invalid birthday: {}", date),
            Self::KindMismatch { expected, found } => {
                write!(f, "Expected {} field, found {} field", expected, found)
            }
            Self::Duplicate { kind, value } => write!(f, "Duplicate {}: {}", kind, value),
        }
    }
}

impl std::error::Error for ValidationError {}
