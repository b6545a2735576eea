use crate::error::StorageResult;
use crate::models::AddressBook;
use tracing::warn;

/// Repository for persisting a whole address book.
///
/// Provides abstraction over where and how a book is stored,
/// enabling different implementations (JSON file, mock).
pub trait BookRepository {
    /// Persist every record of `book`, replacing what was stored before.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;

    /// Read back a previously saved book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Load the stored book, falling back to an empty one.
    ///
    /// A failed load is reported through `tracing` and never aborts the caller.
    fn load_or_empty(&self) -> AddressBook {
        match self.load() {
            Ok(book) => book,
            Err(e) => {
                warn!("Could not load address book, starting empty: {}", e);
                AddressBook::new()
            }
        }
    }
}
