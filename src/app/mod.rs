//! Operation layer
//!
//! The surface an embedding layer (HTTP routes, IPC, a CLI) calls into.
//! Every operation follows the same sequence: shared-secret check first,
//! input validation second, port calls last. Nothing is written on any
//! failure.

pub mod books;
pub mod capture;
pub mod export;
pub mod words;

use crate::adapters::services::asr::transcriber_from_config;
use crate::adapters::services::llm::interpreter_from_config;
use crate::adapters::storage::SqliteStorage;
use crate::auth::AuthGuard;
use crate::config::AppConfig;
use crate::error::Result;
use crate::ports::interpreter::InterpreterPort;
use crate::ports::storage::StoragePort;
use crate::ports::transcriber::TranscriberPort;
use std::sync::Arc;

/// Engine state shared across operations
///
/// Owns the one storage handle reused for the process lifetime and the two
/// active service providers. Passed explicitly wherever operations run.
pub struct App {
    pub storage: Arc<dyn StoragePort>,
    pub interpreter: Arc<dyn InterpreterPort>,
    pub transcriber: Arc<dyn TranscriberPort>,
    pub auth: AuthGuard,
}

impl App {
    /// Initialize the engine
    ///
    /// Opens the database, runs migrations, and wires the configured
    /// providers. Provider misconfiguration fails here, not at request time.
    pub fn initialize(config: &AppConfig) -> Result<Self> {
        let storage = SqliteStorage::new(&config.db_path)?;
        storage.run_migrations()?;
        log::info!("Database ready at {}", config.db_path.display());

        let interpreter: Arc<dyn InterpreterPort> =
            Arc::from(interpreter_from_config(&config.interpreter)?);
        let transcriber: Arc<dyn TranscriberPort> =
            Arc::from(transcriber_from_config(&config.transcriber)?);

        if !interpreter.is_configured() {
            log::warn!(
                "Interpreter provider '{}' has no API key configured",
                interpreter.provider_name()
            );
        }
        if !transcriber.is_configured() {
            log::warn!(
                "Transcriber provider '{}' has no API key configured",
                transcriber.provider_name()
            );
        }

        Ok(Self {
            storage: Arc::new(storage),
            interpreter,
            transcriber,
            auth: AuthGuard::new(config.auth_password.clone()),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{auth_header, harness_with_transcript};
    use super::*;
    use crate::app::books::CreateBookRequest;
    use crate::app::capture::CaptureSession;
    use crate::domain::models::{Interpretation, WordEntry};

    /// Full capture cycle: create a book, speak a word, confirm the
    /// interpretation, export the deck.
    #[tokio::test]
    async fn test_capture_to_export_scenario() {
        let _ = env_logger::builder().is_test(true).try_init();
        let harness = harness_with_transcript("διαβαζω");
        let app = &harness.app;

        let book = books::create_book(
            app,
            auth_header(),
            CreateBookRequest {
                title: "Βίος".to_string(),
                author: "Α".to_string(),
                tag: "bios".to_string(),
            },
        )
        .await
        .unwrap();
        let book_id = book.id.unwrap();
        assert!(book_id > 0);
        assert_eq!(book.tag, "bios");

        harness
            .interpreter
            .push_result(Interpretation::Confident(WordEntry {
                lemma: "διαβάζω".to_string(),
                translation: "to read".to_string(),
                example: "Διαβάζω ένα βιβλίο κάθε βράδυ πριν κοιμηθώ.".to_string(),
                explanation: "Common verb, takes a direct object.".to_string(),
            }));

        let mut session = CaptureSession::open(app, auth_header(), book_id)
            .await
            .unwrap();
        session.toggle_capture().unwrap();
        session.finish_capture(&[1, 2, 3], "webm").await.unwrap();
        let word = session.confirm_save().await.unwrap();

        assert_eq!(word.original, "διαβαζω");
        assert_eq!(word.lemma, "διαβάζω");
        assert_eq!(word.book_id, book_id);

        let document = export::export_deck(app, auth_header(), Some(book_id))
            .await
            .unwrap();
        let lines: Vec<_> = document.body.lines().collect();
        assert_eq!(lines.len(), 4);
        let fields: Vec<_> = lines[3].split('\t').collect();
        assert_eq!(fields[2], "\"bios\"");
    }
}
