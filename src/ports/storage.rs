/// Storage port trait
///
/// Defines the interface for database operations.
/// Implementation: SQLite adapter
use crate::domain::models::{Book, Word, WordWithBook};
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for storage operations
#[async_trait]
pub trait StoragePort: Send + Sync {
    // Book operations
    /// Create a new book, returning its generated id
    async fn create_book(&self, book: &Book) -> Result<i64>;

    /// Get a book by ID
    async fn get_book(&self, id: i64) -> Result<Option<Book>>;

    /// List all books, newest first
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// Delete a book and all of its words. Deleting a missing id is a no-op.
    async fn delete_book(&self, id: i64) -> Result<()>;

    // Word operations
    /// Create a new word, returning its generated id
    async fn create_word(&self, word: &Word) -> Result<i64>;

    /// List words newest first, optionally scoped to one book
    async fn list_words(&self, book_id: Option<i64>) -> Result<Vec<Word>>;

    /// Delete a word by ID. Deleting a missing id is a no-op.
    async fn delete_word(&self, id: i64) -> Result<()>;

    /// List all words joined with their owning book's title and tag,
    /// newest first. Input to the export formatter.
    async fn list_words_with_books(&self) -> Result<Vec<WordWithBook>>;
}
