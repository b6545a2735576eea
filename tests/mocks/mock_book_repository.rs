use address_book::error::{StorageError, StorageResult};
use address_book::{AddressBook, BookRepository};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps the saved book in memory, can be switched into a failing mode, and
/// tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    stored: Arc<Mutex<Option<AddressBook>>>,
    fail_loads: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new empty MockBookRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(book);
        repo
    }

    /// Make every subsequent load fail with a deserialization error.
    pub fn fail_loads(&self) {
        *self.fail_loads.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }

    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        if *self.fail_loads.lock().unwrap() {
            return Err(StorageError::Deserialization("corrupt mock data".to_string()));
        }

        self.stored
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StorageError::NotFound(PathBuf::from("mock")))
    }
}
