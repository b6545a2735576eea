//! Address Book - an in-memory contact book with search, pagination and file persistence.
//!
//! Contacts are stored as [`Record`]s keyed by name inside an [`AddressBook`].
//! Every contact attribute is a validated [`FieldValue`], so a record can never
//! hold a malformed phone number or birthday.
//!
//! # Architecture
//!
//! - **domain**: Validated field values and validation errors
//! - **models**: Records and the address book
//! - **search**: Substring search across names, emails and phones
//! - **repositories**: Versioned JSON file persistence
//! - **error**: Storage and configuration error types
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut record = Record::with_name("Andrew").unwrap();
//! record.add_phone("380671234455").unwrap();
//! record.add_email("andrew@gmail.com").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//!
//! assert_eq!(book.search("GMAIL"), vec!["Andrew"]);
//! assert_eq!(book.search("1234"), vec!["Andrew"]);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod search;

// Re-export commonly used types
pub use config::Config;
pub use domain::{FieldKind, FieldValue, ValidationError};
pub use error::{ConfigError, StorageError, StorageResult};
pub use models::{AddressBook, Pages, Record, RecordEditor};
pub use repositories::{BookRepository, JsonFileRepository};
pub use search::{SearchMatch, SearchableField};
