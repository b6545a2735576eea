//! Search utilities for the address book.
//!
//! This module provides a linear substring search across contact names,
//! emails and phone numbers.

pub mod contact_search;

pub use contact_search::{search, search_matches, SearchMatch, SearchableField};
