//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the saved address book.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// File the book is loaded from and saved to (default: "addressbook.json")
    pub book_path: PathBuf,

    /// Number of records per printed page (default: 1)
    pub page_size: usize,

    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Path of the book file (default: "addressbook.json")
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per page, greater than zero (default: 1)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_path = env::var("ADDRESS_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_PATH));

        if book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", 1)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_path,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            page_size: 1,
            log_level: "warn".to_string(),
        }
    }
}
