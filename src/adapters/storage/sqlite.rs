/// SQLite storage adapter
///
/// Implements StoragePort for SQLite database operations. One connection is
/// opened per process and reused across calls behind a mutex; the handle is
/// passed explicitly wherever storage is needed.
use crate::domain::models::{Book, Word, WordWithBook};
use crate::error::{AppError, Result};
use crate::ports::storage::StoragePort;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// SQLite storage implementation
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// Create a new SQLite storage with the given database path
    pub fn new(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        // Enable foreign keys
        conn.execute("PRAGMA foreign_keys = ON", [])?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// In-memory storage, for tests
    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run database migrations
    pub fn run_migrations(&self) -> Result<()> {
        use rusqlite_migration::{Migrations, M};

        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../../migrations/001_initial.sql"
        ))]);

        let mut conn = self.conn.lock().unwrap();
        migrations
            .to_latest(&mut conn)
            .map_err(|e| AppError::Database(rusqlite::Error::ToSqlConversionFailure(Box::new(e))))?;

        Ok(())
    }
}

fn book_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        author: row.get(2)?,
        tag: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn word_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Word> {
    Ok(Word {
        id: Some(row.get(0)?),
        book_id: row.get(1)?,
        original: row.get(2)?,
        lemma: row.get(3)?,
        translation: row.get(4)?,
        example: row.get(5)?,
        explanation: row.get(6)?,
        created_at: row.get(7)?,
    })
}

#[async_trait]
impl StoragePort for SqliteStorage {
    async fn create_book(&self, book: &Book) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO books (title, author, tag, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![book.title, book.author, book.tag, book.created_at],
        )?;
        Ok(conn.last_insert_rowid())
    }

    async fn get_book(&self, id: i64) -> Result<Option<Book>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, author, tag, created_at FROM books WHERE id = ?1",
        )?;

        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(book_from_row(row)?)),
            None => Ok(None),
        }
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, author, tag, created_at
             FROM books ORDER BY created_at DESC, id DESC",
        )?;

        let rows = stmt.query_map([], book_from_row)?;

        let mut books = Vec::new();
        for book_result in rows {
            books.push(book_result?);
        }

        Ok(books)
    }

    async fn delete_book(&self, id: i64) -> Result<()> {
        // Fixed order: words first, then the owning book
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM words WHERE book_id = ?1", params![id])?;
        conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
        Ok(())
    }

    async fn create_word(&self, word: &Word) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO words (book_id, original, lemma, translation, example, explanation, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                word.book_id,
                word.original,
                word.lemma,
                word.translation,
                word.example,
                word.explanation,
                word.created_at,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    async fn list_words(&self, book_id: Option<i64>) -> Result<Vec<Word>> {
        let conn = self.conn.lock().unwrap();

        let mut words = Vec::new();
        match book_id {
            Some(book_id) => {
                let mut stmt = conn.prepare(
                    "SELECT id, book_id, original, lemma, translation, example, explanation, created_at
                     FROM words WHERE book_id = ?1 ORDER BY created_at DESC, id DESC",
                )?;
                let rows = stmt.query_map(params![book_id], word_from_row)?;
                for word_result in rows {
                    words.push(word_result?);
                }
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, book_id, original, lemma, translation, example, explanation, created_at
                     FROM words ORDER BY created_at DESC, id DESC",
                )?;
                let rows = stmt.query_map([], word_from_row)?;
                for word_result in rows {
                    words.push(word_result?);
                }
            }
        }

        Ok(words)
    }

    async fn delete_word(&self, id: i64) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM words WHERE id = ?1", params![id])?;
        Ok(())
    }

    async fn list_words_with_books(&self) -> Result<Vec<WordWithBook>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT words.id, words.book_id, words.original, words.lemma, words.translation,
                    words.example, words.explanation, words.created_at,
                    books.title, books.tag
             FROM words
             JOIN books ON words.book_id = books.id
             ORDER BY words.created_at DESC, words.id DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(WordWithBook {
                word: word_from_row(row)?,
                book_title: row.get(8)?,
                book_tag: row.get(9)?,
            })
        })?;

        let mut list = Vec::new();
        for row_result in rows {
            list.push(row_result?);
        }

        Ok(list)
    }
}
