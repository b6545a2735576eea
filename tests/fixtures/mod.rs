//! Test fixtures and sample data.
//!
//! This module provides reusable records and books for integration tests.

use address_book::{AddressBook, FieldValue, Record};

/// Create a record from raw values, panicking on invalid input.
#[allow(dead_code)]
pub fn sample_record(
    name: &str,
    phones: &[&str],
    emails: &[&str],
    birthday: Option<&str>,
) -> Record {
    Record::new(
        FieldValue::name(name).unwrap(),
        phones.iter().map(|p| FieldValue::phone(*p).unwrap()).collect(),
        emails.iter().map(|e| FieldValue::email(*e).unwrap()).collect(),
        birthday.map(|b| FieldValue::birthday(b).unwrap()),
    )
    .unwrap()
}

/// Four contacts in a fixed order; Olga has two emails and no birthday.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    vec![
        sample_record(
            "Andrew",
            &["380671234455", "380503216677"],
            &["andrew@gmail.com"],
            Some("18.08.2003"),
        ),
        sample_record(
            "Sergii",
            &["380673451270", "380502321517"],
            &["sergii@gmail.com"],
            Some("21.07.1999"),
        ),
        sample_record(
            "Oleg",
            &["380938761535", "380502329870"],
            &["oleg@gmail.com"],
            Some("17.02.2004"),
        ),
        sample_record(
            "Olga",
            &["380933458790", "380507778899"],
            &["olga@gmail.com", "olga@yahoo.com"],
            None,
        ),
    ]
    .into_iter()
    .collect()
}
