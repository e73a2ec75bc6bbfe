//! Mock implementations for testing

use crate::domain::models::{Book, Interpretation, Word, WordWithBook};
use crate::error::{AppError, Result};
use crate::ports::interpreter::InterpreterPort;
use crate::ports::storage::StoragePort;
use crate::ports::transcriber::TranscriberPort;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Mock storage implementation for testing
#[derive(Default)]
pub struct MockStorage {
    books: Mutex<HashMap<i64, Book>>,
    words: Mutex<Vec<Word>>,
    next_id: Mutex<i64>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }
}

#[async_trait]
impl StoragePort for MockStorage {
    async fn create_book(&self, book: &Book) -> Result<i64> {
        let id = self.next_id();
        let mut b = book.clone();
        b.id = Some(id);
        self.books.lock().unwrap().insert(id, b);
        Ok(id)
    }

    async fn get_book(&self, id: i64) -> Result<Option<Book>> {
        Ok(self.books.lock().unwrap().get(&id).cloned())
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        let books = self.books.lock().unwrap();
        let mut list: Vec<_> = books.values().cloned().collect();
        list.sort_by_key(|b| (-b.created_at, -b.id.unwrap_or(0)));
        Ok(list)
    }

    async fn delete_book(&self, id: i64) -> Result<()> {
        self.words.lock().unwrap().retain(|w| w.book_id != id);
        self.books.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn create_word(&self, word: &Word) -> Result<i64> {
        let id = self.next_id();
        let mut w = word.clone();
        w.id = Some(id);
        self.words.lock().unwrap().push(w);
        Ok(id)
    }

    async fn list_words(&self, book_id: Option<i64>) -> Result<Vec<Word>> {
        let words = self.words.lock().unwrap();
        let mut list: Vec<_> = words
            .iter()
            .filter(|w| book_id.map_or(true, |id| w.book_id == id))
            .cloned()
            .collect();
        list.sort_by_key(|w| (-w.created_at, -w.id.unwrap_or(0)));
        Ok(list)
    }

    async fn delete_word(&self, id: i64) -> Result<()> {
        self.words.lock().unwrap().retain(|w| w.id != Some(id));
        Ok(())
    }

    async fn list_words_with_books(&self) -> Result<Vec<WordWithBook>> {
        let books = self.books.lock().unwrap();
        let mut rows = Vec::new();
        for word in self.words.lock().unwrap().iter() {
            if let Some(book) = books.get(&word.book_id) {
                rows.push(WordWithBook {
                    word: word.clone(),
                    book_title: book.title.clone(),
                    book_tag: book.tag.clone(),
                });
            }
        }
        rows.sort_by_key(|r| (-r.word.created_at, -r.word.id.unwrap_or(0)));
        Ok(rows)
    }
}

/// Mock interpreter with scripted responses, consumed in order
#[derive(Default)]
pub struct MockInterpreter {
    responses: Mutex<VecDeque<std::result::Result<Interpretation, String>>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_result(&self, interpretation: Interpretation) {
        self.responses.lock().unwrap().push_back(Ok(interpretation));
    }

    pub fn push_failure(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }
}

#[async_trait]
impl InterpreterPort for MockInterpreter {
    async fn interpret(&self, word: &str) -> Result<Interpretation> {
        self.calls.lock().unwrap().push(word.to_string());
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(interpretation)) => Ok(interpretation),
            Some(Err(message)) => Err(AppError::Interpretation(message)),
            None => Err(AppError::Interpretation(
                "no scripted response left".to_string(),
            )),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Mock transcriber returning a fixed transcript
pub struct MockTranscriber {
    transcript: String,
    fail: bool,
    pub calls: Mutex<Vec<(usize, String)>>,
}

impl MockTranscriber {
    pub fn new(transcript: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            transcript: String::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TranscriberPort for MockTranscriber {
    async fn transcribe(&self, audio: &[u8], format: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((audio.len(), format.to_string()));
        if self.fail {
            return Err(AppError::Transcription("scripted failure".to_string()));
        }
        Ok(self.transcript.clone())
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        true
    }
}
