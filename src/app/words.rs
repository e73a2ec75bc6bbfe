//! Word operations
//!
//! Saving goes through here only after the user confirms an interpretation;
//! the capture orchestrator calls the same storage path. Words are never
//! updated, only created and deleted.

use crate::app::App;
use crate::domain::models::{Word, WordEntry};
use crate::error::{AppError, Result};
use crate::ports::storage::StoragePort;
use serde::Deserialize;

/// Request to save a confirmed word
#[derive(Debug, Clone, Deserialize)]
pub struct SaveWordRequest {
    pub book_id: i64,
    pub original: String,
    pub lemma: String,
    pub translation: String,
    pub example: String,
    pub explanation: String,
}

/// List words newest first, optionally scoped to one book
pub async fn list_words(
    app: &App,
    authorization: Option<&str>,
    book_id: Option<i64>,
) -> Result<Vec<Word>> {
    app.auth.require(authorization)?;
    app.storage.list_words(book_id).await
}

/// Save one confirmed word against an existing book
pub async fn save_word(
    app: &App,
    authorization: Option<&str>,
    request: SaveWordRequest,
) -> Result<Word> {
    app.auth.require(authorization)?;

    let required = [
        ("original", &request.original),
        ("lemma", &request.lemma),
        ("translation", &request.translation),
        ("example", &request.example),
        ("explanation", &request.explanation),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::InvalidInput(format!("{} is required", name)));
        }
    }

    if app.storage.get_book(request.book_id).await?.is_none() {
        return Err(AppError::NotFound(format!("book {}", request.book_id)));
    }

    let mut word = Word::new(
        request.book_id,
        request.original,
        WordEntry {
            lemma: request.lemma,
            translation: request.translation,
            example: request.example,
            explanation: request.explanation,
        },
    );
    let id = app.storage.create_word(&word).await?;
    word.id = Some(id);

    log::info!("Saved word {} ({}) to book {}", id, word.lemma, word.book_id);
    Ok(word)
}

/// Delete a word by id. Missing ids are a no-op success.
pub async fn delete_word(app: &App, authorization: Option<&str>, id: i64) -> Result<()> {
    app.auth.require(authorization)?;
    app.storage.delete_word(id).await?;
    log::info!("Deleted word {}", id);
    Ok(())
}
