//! Record model representing one contact in the address book.

use crate::domain::{FieldKind, FieldValue, ValidationError};
use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

/// A contact: one name, any number of phones and emails, and an optional birthday.
///
/// Phones and emails keep their insertion order and never contain two entries
/// with the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: FieldValue,
    phones: Vec<FieldValue>,
    emails: Vec<FieldValue>,
    birthday: Option<FieldValue>,
}

impl Record {
    /// Create a new record from already-validated fields.
    ///
    /// Repeated phones or emails are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::KindMismatch` if any field is of the wrong kind,
    /// e.g. an email passed in the phone list.
    pub fn new(
        name: FieldValue,
        phones: Vec<FieldValue>,
        emails: Vec<FieldValue>,
        birthday: Option<FieldValue>,
    ) -> Result<Self, ValidationError> {
        name.expect_kind(FieldKind::Name)?;
        if let Some(ref birthday) = birthday {
            birthday.expect_kind(FieldKind::Birthday)?;
        }

        Ok(Self {
            name,
            phones: dedup_fields(phones, FieldKind::Phone)?,
            emails: dedup_fields(emails, FieldKind::Email)?,
            birthday,
        })
    }

    /// Create a record holding only a name.
    pub fn with_name(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(FieldValue::name(name)?, Vec::new(), Vec::new(), None)
    }

    pub fn name(&self) -> &FieldValue {
        &self.name
    }

    pub fn phones(&self) -> &[FieldValue] {
        &self.phones
    }

    pub fn emails(&self) -> &[FieldValue] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<&FieldValue> {
        self.birthday.as_ref()
    }

    /// One-line summary of the record.
    ///
    /// Format: `Name: <name>, Phones: <p1, p2>, Emails: <e1, e2>, Birthday: <date>`.
    /// Segments are left empty when the record has no such values.
    pub fn display_info(&self) -> String {
        let phone_info = join_values(&self.phones);
        let email_info = join_values(&self.emails);
        let birthday_info = self
            .birthday
            .as_ref()
            .map(FieldValue::display_info)
            .unwrap_or_default();

        format!(
            "Name: {}, Phones: {}, Emails: {}, Birthday: {}",
            self.name.display_info(),
            phone_info,
            email_info,
            birthday_info
        )
    }

    /// Days from `reference` until the next occurrence of the birthday.
    ///
    /// Returns 0 when the birthday falls on `reference` itself and `None`
    /// when no birthday is set. A 29 February birthday is counted on
    /// 28 February in non-leap years.
    pub fn days_until_birthday(&self, reference: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?.as_birthday_date()?;

        let mut next = occurrence_in_year(birthday, reference.year())?;
        if next < reference {
            next = occurrence_in_year(birthday, reference.year() + 1)?;
        }

        Some((next - reference).num_days())
    }

    /// [`Record::days_until_birthday`] relative to the local current date.
    pub fn days_until_birthday_today(&self) -> Option<i64> {
        self.days_until_birthday(Local::now().date_naive())
    }

    /// Validate and append a phone number.
    ///
    /// Returns `Ok(false)` without changing the record if the number is
    /// already present.
    pub fn add_phone(&mut self, raw: &str) -> Result<bool, ValidationError> {
        let added = add_value(&mut self.phones, FieldKind::Phone, raw)?;
        if added {
            debug!(contact = %self.name, phone = raw, "Phone added");
        }
        Ok(added)
    }

    /// Validate and append an email address.
    ///
    /// Returns `Ok(false)` without changing the record if the address is
    /// already present.
    pub fn add_email(&mut self, raw: &str) -> Result<bool, ValidationError> {
        let added = add_value(&mut self.emails, FieldKind::Email, raw)?;
        if added {
            debug!(contact = %self.name, email = raw, "Email added");
        }
        Ok(added)
    }

    /// Remove the phone equal to `phone`, returning the index it had.
    pub fn delete_phone(&mut self, phone: &str) -> Option<usize> {
        let index = position(&self.phones, phone)?;
        self.phones.remove(index);
        debug!(contact = %self.name, phone, index, "Phone deleted");
        Some(index)
    }

    /// Remove the email equal to `email`, returning the index it had.
    pub fn delete_email(&mut self, email: &str) -> Option<usize> {
        let index = position(&self.emails, email)?;
        self.emails.remove(index);
        debug!(contact = %self.name, email, index, "Email deleted");
        Some(index)
    }

    /// Replace `old_phone` with `new_phone` in place.
    ///
    /// The new number is validated before anything changes. Returns
    /// `Ok(None)` if `old_phone` is not on the record.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidPhone` if `new_phone` is malformed
    /// - `ValidationError::Duplicate` if `new_phone` is already stored at another position
    pub fn edit_phone(
        &mut self,
        old_phone: &str,
        new_phone: &str,
    ) -> Result<Option<usize>, ValidationError> {
        let index = edit_value(&mut self.phones, FieldKind::Phone, old_phone, new_phone)?;
        if let Some(index) = index {
            debug!(contact = %self.name, old_phone, new_phone, index, "Phone edited");
        }
        Ok(index)
    }

    /// Replace `old_email` with `new_email` in place.
    ///
    /// Same contract as [`Record::edit_phone`].
    pub fn edit_email(
        &mut self,
        old_email: &str,
        new_email: &str,
    ) -> Result<Option<usize>, ValidationError> {
        let index = edit_value(&mut self.emails, FieldKind::Email, old_email, new_email)?;
        if let Some(index) = index {
            debug!(contact = %self.name, old_email, new_email, index, "Email edited");
        }
        Ok(index)
    }

    /// Find the phone whose value is exactly `value`.
    pub fn find_phone(&self, value: &str) -> Option<&FieldValue> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Find the email whose value is exactly `value`.
    pub fn find_email(&self, value: &str) -> Option<&FieldValue> {
        self.emails.iter().find(|email| email.as_str() == value)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(FieldValue::birthday(raw)?);
        debug!(contact = %self.name, birthday = raw, "Birthday set");
        Ok(())
    }

    /// Remove the birthday, returning the previous value.
    pub fn clear_birthday(&mut self) -> Option<FieldValue> {
        self.birthday.take()
    }
}

fn join_values(values: &[FieldValue]) -> String {
    values
        .iter()
        .map(FieldValue::display_info)
        .collect::<Vec<_>>()
        .join(", ")
}

fn position(values: &[FieldValue], value: &str) -> Option<usize> {
    values.iter().position(|field| field.as_str() == value)
}

fn dedup_fields(
    fields: Vec<FieldValue>,
    kind: FieldKind,
) -> Result<Vec<FieldValue>, ValidationError> {
    let mut unique: Vec<FieldValue> = Vec::with_capacity(fields.len());
    for field in fields {
        field.expect_kind(kind)?;
        if !unique.contains(&field) {
            unique.push(field);
        }
    }
    Ok(unique)
}

fn add_value(
    values: &mut Vec<FieldValue>,
    kind: FieldKind,
    raw: &str,
) -> Result<bool, ValidationError> {
    let field = FieldValue::new(kind, raw)?;
    if values.contains(&field) {
        return Ok(false);
    }
    values.push(field);
    Ok(true)
}

fn edit_value(
    values: &mut [FieldValue],
    kind: FieldKind,
    old: &str,
    new: &str,
) -> Result<Option<usize>, ValidationError> {
    let replacement = FieldValue::new(kind, new)?;

    let Some(index) = position(values, old) else {
        return Ok(None);
    };

    if let Some(existing) = position(values, new) {
        if existing != index {
            return Err(ValidationError::Duplicate {
                kind,
                value: new.to_string(),
            });
        }
    }

    values[index] = replacement;
    Ok(Some(index))
}

fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        // 29 February in a non-leap year
        NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1)
    })
}
