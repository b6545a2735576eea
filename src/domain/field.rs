//! FieldValue value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Phone numbers are stored as exactly 12 ASCII digits, e.g. `380671234455`.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{12}$").expect("Invalid phone regex"));

/// Birthdays use a zero-padded `DD.MM.YYYY` layout.
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Invalid birthday regex"));

/// chrono format matching [`BIRTHDAY_PATTERN`].
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// The kind of contact attribute a [`FieldValue`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Birthday,
}

impl FieldKind {
    /// Get display name for the field kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Birthday => "birthday",
        }
    }

    /// Check `raw` against the format rules of this kind.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyValue` for an empty name or email
    /// - `ValidationError::InvalidPhone` unless `raw` is 12 ASCII digits
    /// - `ValidationError::InvalidBirthday` unless `raw` is a real `DD.MM.YYYY` date
    pub fn validate(&self, raw: &str) -> Result<(), ValidationError> {
        match self {
            // Email format is intentionally not checked
            Self::Name | Self::Email => {
                if raw.is_empty() {
                    return Err(ValidationError::EmptyValue(*self));
                }
            }
            Self::Phone => {
                if !PHONE_PATTERN.is_match(raw) {
                    return Err(ValidationError::InvalidPhone(raw.to_string()));
                }
            }
            Self::Birthday => {
                parse_birthday(raw)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn parse_birthday(raw: &str) -> Result<NaiveDate, ValidationError> {
    if !BIRTHDAY_PATTERN.is_match(raw) {
        return Err(ValidationError::InvalidBirthday(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
        .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
}

/// A single validated contact attribute.
///
/// Every value is checked against its [`FieldKind`] when it is constructed
/// or reassigned, so a `FieldValue` of kind `Phone` always holds 12 digits
/// and one of kind `Birthday` always holds a parseable date.
///
/// # Example
///
/// ```
/// use address_book::domain::{FieldKind, FieldValue};
///
/// let phone = FieldValue::new(FieldKind::Phone, "380671234455").unwrap();
/// assert_eq!(phone.display_info(), "380671234455");
/// assert!(FieldValue::phone("+38 067 123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldValue {
    kind: FieldKind,
    value: String,
}

impl FieldValue {
    /// Create a new FieldValue, validating `raw` for the given kind.
    ///
    /// # Errors
    ///
    /// See [`FieldKind::validate`].
    pub fn new(kind: FieldKind, raw: impl Into<String>) -> Result<Self, ValidationError> {
        let value = raw.into();
        kind.validate(&value)?;
        Ok(Self { kind, value })
    }

    pub fn name(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(FieldKind::Name, raw)
    }

    pub fn phone(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(FieldKind::Phone, raw)
    }

    pub fn email(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(FieldKind::Email, raw)
    }

    pub fn birthday(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(FieldKind::Birthday, raw)
    }

    /// Replace the value, re-validating it under the current kind.
    ///
    /// On error the previous value is kept.
    pub fn set_value(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        let value = raw.into();
        self.kind.validate(&value)?;
        self.value = value;
        Ok(())
    }

    /// Get the field kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Text shown for this field in a record summary.
    pub fn display_info(&self) -> &str {
        &self.value
    }

    /// Parse a birthday field into a calendar date.
    ///
    /// Returns `None` for fields of any other kind.
    pub fn as_birthday_date(&self) -> Option<NaiveDate> {
        match self.kind {
            FieldKind::Birthday => NaiveDate::parse_from_str(&self.value, BIRTHDAY_FORMAT).ok(),
            _ => None,
        }
    }

    /// Fail with `KindMismatch` unless this field has the expected kind.
    pub(crate) fn expect_kind(&self, expected: FieldKind) -> Result<(), ValidationError> {
        if self.kind != expected {
            return Err(ValidationError::KindMismatch {
                expected,
                found: self.kind,
            });
        }
        Ok(())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = FieldValue::phone("380671234455").unwrap();
        assert_eq!(phone.kind(), FieldKind::Phone);
        assert_eq!(phone.display_info(), "380671234455");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(FieldValue::phone("").is_err());
        assert!(FieldValue::phone("38067123445").is_err());
        assert!(FieldValue::phone("3806712344556").is_err());
        assert!(FieldValue::phone("+38067123445").is_err());
        assert!(FieldValue::phone("380-67123445").is_err());
        assert!(FieldValue::phone("38067123445a").is_err());
        assert!(FieldValue::phone("000000000000").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode digits but not ASCII
        let result = FieldValue::phone("٣٨٠٦٧١٢٣٤٤٥٥");
        assert!(matches!(result, Err(ValidationError::InvalidPhone(_))));
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = FieldValue::birthday("18.08.2003").unwrap();
        assert_eq!(
            birthday.as_birthday_date(),
            NaiveDate::from_ymd_opt(2003, 8, 18)
        );
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(FieldValue::birthday("2003-08-18").is_err());
        assert!(FieldValue::birthday("18/08/2003").is_err());
        assert!(FieldValue::birthday("8.8.2003").is_err());
        assert!(FieldValue::birthday("18.08.03").is_err());
        assert!(FieldValue::birthday("32.01.2000").is_err());
        assert!(FieldValue::birthday("29.02.2001").is_err());
        assert!(FieldValue::birthday("29.02.2000").is_ok());
    }

    #[test]
    fn test_name_and_email_reject_empty() {
        assert_eq!(
            FieldValue::name(""),
            Err(ValidationError::EmptyValue(FieldKind::Name))
        );
        assert_eq!(
            FieldValue::email(""),
            Err(ValidationError::EmptyValue(FieldKind::Email))
        );
    }

    #[test]
    fn test_email_format_not_validated() {
        let email = FieldValue::email("not an email").unwrap();
        assert_eq!(email.as_str(), "not an email");
    }

    #[test]
    fn test_set_value_revalidates() {
        let mut phone = FieldValue::phone("380671234455").unwrap();
        assert!(phone.set_value("12345").is_err());
        assert_eq!(phone.as_str(), "380671234455");

        phone.set_value("380503216677").unwrap();
        assert_eq!(phone.as_str(), "380503216677");
    }

    #[test]
    fn test_as_birthday_date_other_kind() {
        let name = FieldValue::name("Andrew").unwrap();
        assert!(name.as_birthday_date().is_none());
    }

    #[test]
    fn test_field_display() {
        let email = FieldValue::email("andrew@gmail.com").unwrap();
        assert_eq!(format!("{}", email), "andrew@gmail.com");
    }
}
