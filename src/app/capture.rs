//! Capture-cycle orchestration
//!
//! One capture cycle runs Idle → Capturing (speech path only) →
//! Interpreting → AwaitingConfirmation, then back to Idle through save or
//! discard. Exactly one capture is active at a time and exactly one
//! interpretation may be pending confirmation; service calls are sequenced
//! strictly one at a time. An active speech capture can be cancelled by
//! re-triggering the capture control; an in-flight interpretation cannot be
//! cancelled, only awaited.

use crate::app::App;
use crate::domain::models::{Interpretation, Word, WordEntry};
use crate::error::{AppError, Result};
use crate::ports::interpreter::InterpreterPort;
use crate::ports::storage::StoragePort;
use crate::ports::transcriber::TranscriberPort;
use std::sync::Arc;

// The input is a single word, possibly garbled; anything longer is noise
const MAX_TOKEN_BYTES: usize = 200;

fn validate_token(word: &str) -> Result<()> {
    if word.trim().is_empty() {
        return Err(AppError::InvalidInput("word is required".to_string()));
    }
    if word.len() > MAX_TOKEN_BYTES {
        return Err(AppError::InvalidInput("word is too long".to_string()));
    }
    Ok(())
}

/// Interpret a raw token. Stateless; nothing is persisted.
pub async fn interpret_word(
    app: &App,
    authorization: Option<&str>,
    word: &str,
) -> Result<Interpretation> {
    app.auth.require(authorization)?;
    validate_token(word)?;
    app.interpreter.interpret(word.trim()).await
}

/// Transcribe a complete audio clip. Stateless passthrough.
pub async fn transcribe_audio(
    app: &App,
    authorization: Option<&str>,
    audio: &[u8],
    format: &str,
) -> Result<String> {
    app.auth.require(authorization)?;
    if audio.is_empty() {
        return Err(AppError::InvalidInput("audio is required".to_string()));
    }
    app.transcriber.transcribe(audio, format).await
}

/// Where a capture cycle currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Capturing,
    Interpreting,
    AwaitingConfirmation,
}

/// The one interpretation held for user confirmation
///
/// Keeps the as-captured token so a save records both the original form and
/// its lemma.
#[derive(Debug, Clone)]
pub struct PendingInterpretation {
    pub original: String,
    pub result: Interpretation,
}

/// Orchestrates capture cycles against one selected book
pub struct CaptureSession {
    storage: Arc<dyn StoragePort>,
    interpreter: Arc<dyn InterpreterPort>,
    transcriber: Arc<dyn TranscriberPort>,
    book_id: i64,
    state: CaptureState,
    pending: Option<PendingInterpretation>,
}

impl CaptureSession {
    /// Open a capture session for an existing book.
    ///
    /// A book must be selected before any capture input is accepted; a
    /// missing book rejects the session outright.
    pub async fn open(app: &App, authorization: Option<&str>, book_id: i64) -> Result<Self> {
        app.auth.require(authorization)?;

        if app.storage.get_book(book_id).await?.is_none() {
            return Err(AppError::NotFound(format!("book {}", book_id)));
        }

        Ok(Self {
            storage: app.storage.clone(),
            interpreter: app.interpreter.clone(),
            transcriber: app.transcriber.clone(),
            book_id,
            state: CaptureState::Idle,
            pending: None,
        })
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn pending(&self) -> Option<&PendingInterpretation> {
        self.pending.as_ref()
    }

    /// Toggle the speech capture control.
    ///
    /// Idle starts a capture; triggering again while capturing cancels the
    /// in-flight capture instead of starting a new one. Returns whether a
    /// capture is now active. Blocked while an interpretation is pending.
    pub fn toggle_capture(&mut self) -> Result<bool> {
        match self.state {
            CaptureState::Idle => {
                self.state = CaptureState::Capturing;
                Ok(true)
            }
            CaptureState::Capturing => {
                log::info!("Capture cancelled");
                self.state = CaptureState::Idle;
                Ok(false)
            }
            CaptureState::Interpreting | CaptureState::AwaitingConfirmation => Err(
                AppError::InvalidInput("resolve the pending word first".to_string()),
            ),
        }
    }

    /// Submit a typed token for interpretation.
    pub async fn submit_text(&mut self, raw: &str) -> Result<Interpretation> {
        if self.state != CaptureState::Idle {
            return Err(AppError::InvalidInput(
                "another capture is in progress".to_string(),
            ));
        }
        validate_token(raw)?;
        self.run_interpretation(raw.to_string()).await
    }

    /// Complete a speech capture: transcribe the clip, then interpret the
    /// transcript.
    pub async fn finish_capture(&mut self, audio: &[u8], format: &str) -> Result<Interpretation> {
        if self.state != CaptureState::Capturing {
            return Err(AppError::InvalidInput(
                "no capture is in progress".to_string(),
            ));
        }
        if audio.is_empty() {
            self.state = CaptureState::Idle;
            return Err(AppError::InvalidInput("audio is required".to_string()));
        }

        let transcript = match self.transcriber.transcribe(audio, format).await {
            Ok(transcript) => transcript,
            Err(e) => {
                self.state = CaptureState::Idle;
                return Err(e);
            }
        };

        if let Err(e) = validate_token(&transcript) {
            self.state = CaptureState::Idle;
            return Err(e);
        }

        self.run_interpretation(transcript).await
    }

    async fn run_interpretation(&mut self, raw: String) -> Result<Interpretation> {
        self.state = CaptureState::Interpreting;

        match self.interpreter.interpret(raw.trim()).await {
            Ok(result) => {
                self.pending = Some(PendingInterpretation {
                    original: raw,
                    result: result.clone(),
                });
                self.state = CaptureState::AwaitingConfirmation;
                Ok(result)
            }
            Err(e) => {
                self.state = CaptureState::Idle;
                Err(e)
            }
        }
    }

    /// Persist a confident pending interpretation as a new word.
    pub async fn confirm_save(&mut self) -> Result<Word> {
        let entry = match self.pending_result()? {
            Interpretation::Confident(entry) => entry.clone(),
            Interpretation::Uncertain(_) => {
                return Err(AppError::InvalidInput(
                    "an uncertain result requires choosing an alternative".to_string(),
                ))
            }
        };
        self.persist(entry).await
    }

    /// Persist one candidate of an uncertain pending interpretation.
    pub async fn confirm_save_alternative(&mut self, index: usize) -> Result<Word> {
        let entry = match self.pending_result()? {
            Interpretation::Uncertain(entries) => entries.get(index).cloned().ok_or_else(|| {
                AppError::InvalidInput(format!("no alternative at index {}", index))
            })?,
            Interpretation::Confident(_) => {
                return Err(AppError::InvalidInput(
                    "the result is confident; save it directly".to_string(),
                ))
            }
        };
        self.persist(entry).await
    }

    /// Drop the pending interpretation without persisting anything.
    pub fn discard(&mut self) -> Result<()> {
        self.pending_result()?;
        self.pending = None;
        self.state = CaptureState::Idle;
        Ok(())
    }

    fn pending_result(&self) -> Result<&Interpretation> {
        if self.state != CaptureState::AwaitingConfirmation {
            return Err(AppError::InvalidInput(
                "no interpretation is awaiting confirmation".to_string(),
            ));
        }
        self.pending
            .as_ref()
            .map(|pending| &pending.result)
            .ok_or_else(|| {
                AppError::InvalidInput("no interpretation is awaiting confirmation".to_string())
            })
    }

    async fn persist(&mut self, entry: WordEntry) -> Result<Word> {
        let Some(pending) = self.pending.take() else {
            return Err(AppError::InvalidInput(
                "no interpretation is awaiting confirmation".to_string(),
            ));
        };

        let mut word = Word::new(self.book_id, pending.original.clone(), entry);
        match self.storage.create_word(&word).await {
            Ok(id) => {
                word.id = Some(id);
                self.state = CaptureState::Idle;
                log::info!("Saved word {} ({})", id, word.lemma);
                Ok(word)
            }
            Err(e) => {
                // The result stays pending; the user can retry or discard
                self.pending = Some(pending);
                Err(e)
            }
        }
    }
}
