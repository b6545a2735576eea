//! Substring search across contact names, emails and phones.
//!
//! Search is a linear scan over the book. Names and emails are compared
//! case-insensitively; phones hold only digits, so they are compared as-is.

use crate::models::{AddressBook, Record};
use tracing::debug;

/// Type of field a search query matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchableField {
    /// Contact name
    Name,
    /// Contact email
    Email,
    /// Contact phone
    Phone,
}

impl SearchableField {
    /// Get display name for the field type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// A contact that matched a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// Name of the matching contact
    pub name: String,

    /// First field that matched, checked in name, email, phone order
    pub field: SearchableField,

    /// The field value containing the query
    pub value: String,
}

/// Find every contact whose name, email or phone contains `query`.
///
/// Each contact appears at most once, in book order, tagged with the first
/// field that matched. An empty query matches every contact.
pub fn search_matches(book: &AddressBook, query: &str) -> Vec<SearchMatch> {
    let query_lower = query.to_lowercase();

    let matches: Vec<SearchMatch> = book
        .records()
        .filter_map(|record| match_record(record, query, &query_lower))
        .collect();

    debug!(
        query = %query,
        result_count = matches.len(),
        "Search completed"
    );
    matches
}

/// Names of every contact matching `query`, in book order.
///
/// See [`search_matches`] for the matching rules.
pub fn search(book: &AddressBook, query: &str) -> Vec<String> {
    search_matches(book, query)
        .into_iter()
        .map(|m| m.name)
        .collect()
}

fn match_record(record: &Record, query: &str, query_lower: &str) -> Option<SearchMatch> {
    let name = record.name().as_str();
    let found = |field: SearchableField, value: &str| SearchMatch {
        name: name.to_string(),
        field,
        value: value.to_string(),
    };

    if name.to_lowercase().contains(query_lower) {
        return Some(found(SearchableField::Name, name));
    }

    if let Some(email) = record
        .emails()
        .iter()
        .find(|email| email.as_str().to_lowercase().contains(query_lower))
    {
        return Some(found(SearchableField::Email, email.as_str()));
    }

    record
        .phones()
        .iter()
        .find(|phone| phone.as_str().contains(query))
        .map(|phone| found(SearchableField::Phone, phone.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;

    fn create_test_record(name: &str, phones: &[&str], emails: &[&str]) -> Record {
        Record::new(
            FieldValue::name(name).unwrap(),
            phones.iter().map(|p| FieldValue::phone(*p).unwrap()).collect(),
            emails.iter().map(|e| FieldValue::email(*e).unwrap()).collect(),
            None,
        )
        .unwrap()
    }

    fn sample_book() -> AddressBook {
        vec![
            create_test_record("Andrew", &["380671234455"], &["andrew@gmail.com"]),
            create_test_record("Sergii", &["380673451270"], &["sergii@gmail.com"]),
            create_test_record("Olga", &["380933458790"], &["olga@yahoo.com"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_searchable_field_display_name() {
        assert_eq!(SearchableField::Name.display_name(), "name");
        assert_eq!(SearchableField::Email.display_name(), "email");
        assert_eq!(SearchableField::Phone.display_name(), "phone");
    }

    #[test]
    fn test_search_name_case_insensitive() {
        let book = sample_book();
        assert_eq!(search(&book, "andrew"), vec!["Andrew"]);
        assert_eq!(search(&book, "ANDREW"), vec!["Andrew"]);
    }

    #[test]
    fn test_search_name_reported_once() {
        let book = sample_book();
        // Matches both the name and the email of Andrew
        let matches = search_matches(&book, "andrew");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].field, SearchableField::Name);
    }

    #[test]
    fn test_search_email() {
        let book = sample_book();
        let matches = search_matches(&book, "YAHOO");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Olga");
        assert_eq!(matches[0].field, SearchableField::Email);
        assert_eq!(matches[0].value, "olga@yahoo.com");
    }

    #[test]
    fn test_search_phone() {
        let book = sample_book();
        let matches = search_matches(&book, "3451");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Sergii");
        assert_eq!(matches[0].field, SearchableField::Phone);
    }

    #[test]
    fn test_search_keeps_book_order() {
        let book = sample_book();
        assert_eq!(search(&book, "gmail"), vec!["Andrew", "Sergii"]);
        assert_eq!(search(&book, "3806"), vec!["Andrew", "Sergii"]);
    }

    #[test]
    fn test_search_no_match() {
        let book = sample_book();
        assert!(search(&book, "nobody").is_empty());
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let book = sample_book();
        assert_eq!(search(&book, "").len(), 3);
    }

    #[test]
    fn test_search_empty_book() {
        let book = AddressBook::new();
        assert!(search(&book, "andrew").is_empty());
    }
}
