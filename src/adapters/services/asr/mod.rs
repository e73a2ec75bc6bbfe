//! ASR (Automatic Speech Recognition) service adapters
//!
//! This module provides adapters for different transcription providers:
//! - OpenAI Whisper: multipart file upload
//! - Deepgram: prerecorded REST API
//!
//! Both transcribe one complete clip per request, pinned to the configured
//! source language.

pub mod deepgram;
pub mod whisper;

pub use deepgram::DeepgramTranscriber;
pub use whisper::WhisperTranscriber;

use crate::config::TranscriberConfig;
use crate::error::{AppError, Result};
use crate::ports::transcriber::TranscriberPort;

/// Create the configured transcriber provider.
///
/// Exactly one provider is active per deployment; an unknown name is a
/// wiring-time error, not a request-time one.
pub fn transcriber_from_config(config: &TranscriberConfig) -> Result<Box<dyn TranscriberPort>> {
    match config.provider.as_str() {
        "whisper" => Ok(Box::new(WhisperTranscriber::new(
            config.api_key.clone(),
            config.language.clone(),
        ))),
        "deepgram" => Ok(Box::new(DeepgramTranscriber::new(
            config.api_key.clone(),
            config.language.clone(),
        ))),
        other => Err(AppError::Config(format!(
            "Unknown transcriber provider: {}",
            other
        ))),
    }
}
