//! Versioned JSON file storage for address books.
//!
//! The file holds a format version and the list of records in book order:
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     {
//!       "name": "Andrew",
//!       "phones": ["380671234455"],
//!       "emails": ["andrew@gmail.com"],
//!       "birthday": "18.08.2003"
//!     }
//!   ]
//! }
//! ```
//!
//! Every field is validated again on load, so a hand-edited file cannot
//! smuggle an invalid phone or birthday into a book.

use super::traits::BookRepository;
use crate::domain::{FieldValue, ValidationError};
use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Format version written by this crate.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct VersionHeader {
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    version: u32,
    records: Vec<RecordEntry>,
}

/// On-disk form of a single record.
#[derive(Debug, Serialize, Deserialize)]
struct RecordEntry {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    emails: Vec<String>,
    #[serde(default)]
    birthday: Option<String>,
}

impl From<&Record> for RecordEntry {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record.phones().iter().map(|p| p.as_str().to_string()).collect(),
            emails: record.emails().iter().map(|e| e.as_str().to_string()).collect(),
            birthday: record.birthday().map(|b| b.as_str().to_string()),
        }
    }
}

impl TryFrom<RecordEntry> for Record {
    type Error = ValidationError;

    fn try_from(entry: RecordEntry) -> Result<Self, Self::Error> {
        let phones = entry
            .phones
            .into_iter()
            .map(FieldValue::phone)
            .collect::<Result<Vec<_>, _>>()?;
        let emails = entry
            .emails
            .into_iter()
            .map(FieldValue::email)
            .collect::<Result<Vec<_>, _>>()?;
        let birthday = entry.birthday.map(FieldValue::birthday).transpose()?;

        Record::new(FieldValue::name(entry.name)?, phones, emails, birthday)
    }
}

/// Stores an address book as a single JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the book is written to before being renamed into place.
    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn decode(bytes: &[u8]) -> StorageResult<AddressBook> {
        let header: VersionHeader = serde_json::from_slice(bytes)
            .map_err(|e| StorageError::Deserialization(e.to_string()))?;
        if header.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(header.version));
        }

        let file: BookFile = serde_json::from_slice(bytes)
            .map_err(|e| StorageError::Deserialization(e.to_string()))?;

        let mut book = AddressBook::new();
        for entry in file.records {
            let name = entry.name.clone();
            let record = Record::try_from(entry).map_err(|e| {
                StorageError::Deserialization(format!("record '{}': {}", name, e))
            })?;
            book.add_record(record);
        }
        Ok(book)
    }
}

impl BookRepository for JsonFileRepository {
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let file = BookFile {
            version: FORMAT_VERSION,
            records: book.records().map(RecordEntry::from).collect(),
        };
        let content = serde_json::to_vec_pretty(&file).map_err(std::io::Error::from)?;

        // Write then rename so an interrupted save never truncates the old book
        let tmp_path = self.temp_path();
        fs::write(&tmp_path, content)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        info!(
            path = %self.path.display(),
            records = book.len(),
            "Address book saved"
        );
        Ok(())
    }

    fn load(&self) -> StorageResult<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let book = Self::decode(&bytes)?;
        info!(
            path = %self.path.display(),
            records = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }
}
