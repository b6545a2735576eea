//! Data models for the address book.
//!
//! This module contains the contact [`Record`] and the [`AddressBook`] that
//! owns every record, keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Pages, RecordEditor};
pub use record::Record;
