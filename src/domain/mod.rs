//! Domain value objects and types.
//!
//! This module contains the validated field type that every contact attribute
//! is stored as. Validation happens at construction time so that an invalid
//! phone number or birthday cannot be represented in a record.

pub mod errors;
pub mod field;

pub use errors::ValidationError;
pub use field::{FieldKind, FieldValue, BIRTHDAY_FORMAT};
