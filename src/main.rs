//! Address Book - Main entry point
//!
//! Loads the saved address book, prints it page by page, then answers search
//! queries read from stdin until an empty line is entered.

use address_book::{BookRepository, Config, JsonFileRepository};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging("error");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    init_logging(&config.log_level);
    info!("Configuration loaded successfully");

    let repository = JsonFileRepository::new(config.book_path.clone());
    let book = repository.load_or_empty();
    info!(
        "Address book at {} holds {} contacts",
        repository.path().display(),
        book.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for page in book.iter_pages(config.page_size) {
        writeln!(out, "{}", page)?;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "\nSearch (empty line to finish) >> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let query = line.context("Failed to read search query")?;
        if query.is_empty() {
            break;
        }

        let found = book.search(&query);
        if found.is_empty() {
            writeln!(out, "Nothing found")?;
        } else {
            writeln!(out, "{}", found.join(", "))?;
        }
    }

    Ok(())
}

/// Log to stderr so that log lines never mix with console output.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
