//! AddressBook: the keyed collection of all contact records.

use super::record::Record;
use crate::domain::{FieldValue, ValidationError};
use crate::error::StorageResult;
use crate::repositories::{BookRepository, JsonFileRepository};
use crate::search;
use std::collections::HashMap;
use std::ops::Deref;
use std::path::Path;
use tracing::debug;

/// Separator between records on a full page.
const PAGE_SEPARATOR: &str = "; ";

/// Separator between records on a trailing partial page.
const PARTIAL_PAGE_SEPARATOR: &str = "\n";

/// Contact records keyed by name.
///
/// Holds at most one record per name. Iteration, pagination and search all
/// follow insertion order; replacing a record keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create a new empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record with the same name.
    ///
    /// The replaced record is returned as-is; its phones and emails are not
    /// merged into the new one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().as_str().to_string();
        if let Some(&position) = self.index.get(&name) {
            debug!(contact = %name, "Replacing existing record");
            return Some(std::mem::replace(&mut self.records[position], record));
        }

        debug!(contact = %name, "Adding record");
        self.index.insert(name, self.records.len());
        self.records.push(record);
        None
    }

    /// Look up a record by exact name.
    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Look up a record by exact name for editing.
    ///
    /// The returned [`RecordEditor`] can change phones, emails and the
    /// birthday, but never the name or the record as a whole; use
    /// [`AddressBook::add_record`] to replace a contact.
    ///
    /// ```compile_fail
    /// use address_book::{AddressBook, Record};
    ///
    /// let mut book = AddressBook::new();
    /// book.add_record(Record::with_name("Andrew").unwrap());
    /// *book.find_record_mut("Andrew").unwrap() = Record::with_name("Bob").unwrap();
    /// ```
    pub fn find_record_mut(&mut self, name: &str) -> Option<RecordEditor<'_>> {
        let position = *self.index.get(name)?;
        self.records.get_mut(position).map(|record| RecordEditor { record })
    }

    /// Remove and return the record stored under `name`.
    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        let position = self.index.remove(name)?;
        let removed = self.records.remove(position);

        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        debug!(contact = %name, "Record removed");
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Iterate over contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name().as_str())
    }

    /// Lazily render the book as pages of `page_size` records.
    ///
    /// Full pages join record summaries with `"; "`. A trailing page holding
    /// fewer than `page_size` records joins them with a newline instead.
    /// A `page_size` of zero puts every record on a single trailing page.
    pub fn iter_pages(&self, page_size: usize) -> Pages<'_> {
        Pages {
            records: self.records.iter(),
            page_size,
        }
    }

    /// Names of all contacts matching `query`, in book order.
    ///
    /// See [`search::search`] for the matching rules.
    pub fn search(&self, query: &str) -> Vec<String> {
        search::search(self, query)
    }

    /// Write the whole book to `path`, overwriting any existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        JsonFileRepository::new(path.as_ref()).save(self)
    }

    /// Replace the contents of this book with the one stored at `path`.
    ///
    /// On error the book is left unchanged.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> StorageResult<()> {
        *self = JsonFileRepository::new(path.as_ref()).load()?;
        Ok(())
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

/// Mutable access to a stored record that keeps its name fixed.
///
/// Created by [`AddressBook::find_record_mut`]. Reads go through `Deref`.
#[derive(Debug)]
pub struct RecordEditor<'a> {
    record: &'a mut Record,
}

impl RecordEditor<'_> {
    pub fn add_phone(&mut self, raw: &str) -> Result<bool, ValidationError> {
        self.record.add_phone(raw)
    }

    pub fn add_email(&mut self, raw: &str) -> Result<bool, ValidationError> {
        self.record.add_email(raw)
    }

    pub fn delete_phone(&mut self, phone: &str) -> Option<usize> {
        self.record.delete_phone(phone)
    }

    pub fn delete_email(&mut self, email: &str) -> Option<usize> {
        self.record.delete_email(email)
    }

    pub fn edit_phone(
        &mut self,
        old_phone: &str,
        new_phone: &str,
    ) -> Result<Option<usize>, ValidationError> {
        self.record.edit_phone(old_phone, new_phone)
    }

    pub fn edit_email(
        &mut self,
        old_email: &str,
        new_email: &str,
    ) -> Result<Option<usize>, ValidationError> {
        self.record.edit_email(old_email, new_email)
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.record.set_birthday(raw)
    }

    pub fn clear_birthday(&mut self) -> Option<FieldValue> {
        self.record.clear_birthday()
    }
}

impl Deref for RecordEditor<'_> {
    type Target = Record;

    fn deref(&self) -> &Record {
        self.record
    }
}

/// Iterator over rendered pages, created by [`AddressBook::iter_pages`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: std::slice::Iter<'a, Record>,
    page_size: usize,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let limit = if self.page_size == 0 {
            usize::MAX
        } else {
            self.page_size
        };

        let views: Vec<String> = self
            .records
            .by_ref()
            .take(limit)
            .map(Record::display_info)
            .collect();

        if views.is_empty() {
            return None;
        }

        let separator = if views.len() == self.page_size {
            PAGE_SEPARATOR
        } else {
            PARTIAL_PAGE_SEPARATOR
        };
        Some(views.join(separator))
    }
}
