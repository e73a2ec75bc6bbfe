//! OpenAI Whisper transcription adapter
//!
//! Implements the TranscriberPort against the `/v1/audio/transcriptions`
//! endpoint: one multipart upload per clip, transcript text back.

use crate::error::{AppError, Result};
use crate::ports::transcriber::{content_type_for, TranscriberPort};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "whisper-1";

/// Whisper transcription implementation
pub struct WhisperTranscriber {
    client: Client,
    api_key: String,
    language: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl WhisperTranscriber {
    /// Create a new Whisper transcriber pinned to the given language code
    pub fn new(api_key: String, language: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            language,
        }
    }
}

#[async_trait]
impl TranscriberPort for WhisperTranscriber {
    async fn transcribe(&self, audio: &[u8], format: &str) -> Result<String> {
        log::info!(
            "Transcribing {} bytes with Whisper (format: {}, language: {})",
            audio.len(),
            format,
            self.language
        );

        let part = Part::bytes(audio.to_vec())
            .file_name(format!("capture.{}", format))
            .mime_str(content_type_for(format))
            .map_err(|e| AppError::Transcription(format!("Invalid audio part: {}", e)))?;

        let form = Form::new()
            .part("file", part)
            .text("model", DEFAULT_MODEL)
            .text("language", self.language.clone());

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", OPENAI_API_BASE))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Transcription(format!("Whisper request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Transcription(format!(
                "Whisper API error ({}): {}",
                status, error_text
            )));
        }

        let transcription: TranscriptionResponse = response.json().await.map_err(|e| {
            AppError::Transcription(format!("Failed to parse transcription response: {}", e))
        })?;

        Ok(transcription.text)
    }

    fn provider_name(&self) -> &str {
        "whisper"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
