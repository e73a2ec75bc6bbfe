//! Book operations

use crate::app::App;
use crate::domain::models::Book;
use crate::error::{AppError, Result};
use crate::ports::storage::StoragePort;
use serde::Deserialize;

/// Request to create a new book
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub tag: String,
}

/// List all books, newest first
pub async fn list_books(app: &App, authorization: Option<&str>) -> Result<Vec<Book>> {
    app.auth.require(authorization)?;
    app.storage.list_books().await
}

/// Create a new book
pub async fn create_book(
    app: &App,
    authorization: Option<&str>,
    request: CreateBookRequest,
) -> Result<Book> {
    app.auth.require(authorization)?;

    let title = request.title.trim();
    let author = request.author.trim();
    let tag = request.tag.trim();

    if title.is_empty() || author.is_empty() || tag.is_empty() {
        return Err(AppError::InvalidInput(
            "title, author, and tag are required".to_string(),
        ));
    }
    // Anki treats whitespace as a tag separator, which would split column 3
    if tag.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidInput(
            "tag must be a single label without whitespace".to_string(),
        ));
    }

    let mut book = Book::new(title.to_string(), author.to_string(), tag.to_string());
    let id = app.storage.create_book(&book).await?;
    book.id = Some(id);

    log::info!("Created book {}: {}", id, book.title);
    Ok(book)
}

/// Delete a book and all of its words. Missing ids are a no-op success.
pub async fn delete_book(app: &App, authorization: Option<&str>, id: i64) -> Result<()> {
    app.auth.require(authorization)?;
    app.storage.delete_book(id).await?;
    log::info!("Deleted book {}", id);
    Ok(())
}
