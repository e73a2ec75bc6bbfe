//! Lexis: Greek vocabulary capture and flashcard export engine.
//!
//! A reader working through a Greek book speaks or types an unfamiliar word;
//! Lexis resolves it to its dictionary form through a language model,
//! translates it, generates an example sentence, and stores it against the
//! source book. Stored words export as an Anki-importable deck.
//!
//! The crate is organized ports-and-adapters style:
//!
//! - [`ports`]: trait contracts for storage, word interpretation, and speech
//!   transcription
//! - [`adapters`]: SQLite storage plus the concrete service providers
//!   (Anthropic/OpenAI interpreters, Whisper/Deepgram transcribers)
//! - [`app`]: the authenticated operation layer and the capture-cycle
//!   orchestrator
//! - [`export`]: the Anki deck formatter
//!
//! HTTP routing and UI are left to the embedding layer; every operation here
//! takes the raw `Authorization` header value and checks it against the
//! configured shared secret before touching anything.

pub mod adapters;
pub mod app;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod ports;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, Result};
