/// Domain models for Lexis
///
/// These models represent core business entities and carry no transport or
/// storage concerns.
use serde::{Deserialize, Serialize};

/// A physical book the user is reading
///
/// Immutable once created; deleting a book removes all of its words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    /// Deck label propagated to every exported word row
    pub tag: String,
    pub created_at: i64,
}

impl Book {
    /// Creates a new book instance
    pub fn new(title: String, author: String, tag: String) -> Self {
        Self {
            id: None,
            title,
            author,
            tag,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// A captured vocabulary word, confirmed and stored against a book
///
/// `original` is the token exactly as captured (typed or transcribed),
/// before lemmatization. Words are never updated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub id: Option<i64>,
    pub book_id: i64,
    pub original: String,
    pub lemma: String,
    pub translation: String,
    pub example: String,
    pub explanation: String,
    pub created_at: i64,
}

impl Word {
    /// Creates a new word from a confirmed interpretation entry
    pub fn new(book_id: i64, original: String, entry: WordEntry) -> Self {
        Self {
            id: None,
            book_id,
            original,
            lemma: entry.lemma,
            translation: entry.translation,
            example: entry.example,
            explanation: entry.explanation,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// The four linguistic fields of an interpreted word
///
/// Carries no identity and no book association until the user saves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub lemma: String,
    pub translation: String,
    pub example: String,
    pub explanation: String,
}

/// Outcome of one interpretation call
///
/// The interpreter either recognizes the token outright or, when the input
/// looks garbled, offers exactly three candidate readings. Transient: nothing
/// here is persisted until the user confirms a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpretation {
    Confident(WordEntry),
    Uncertain(Vec<WordEntry>),
}

/// A word joined with its owning book's title and tag
///
/// The export formatter's input row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordWithBook {
    pub word: Word,
    pub book_title: String,
    pub book_tag: String,
}
