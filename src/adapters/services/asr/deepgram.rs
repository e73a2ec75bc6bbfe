//! Deepgram transcription adapter
//!
//! Implements the TranscriberPort for Deepgram's prerecorded API. Single
//! request with the raw clip as the body; the transcript comes back in the
//! first channel's first alternative.

use crate::error::{AppError, Result};
use crate::ports::transcriber::{content_type_for, TranscriberPort};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEEPGRAM_API_BASE: &str = "https://api.deepgram.com/v1";
const DEFAULT_MODEL: &str = "nova-2";

/// Deepgram transcription implementation
pub struct DeepgramTranscriber {
    client: Client,
    api_key: String,
    language: String,
}

#[derive(Debug, Deserialize)]
struct DeepgramResponse {
    results: Results,
}

#[derive(Debug, Deserialize)]
struct Results {
    channels: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
struct Channel {
    alternatives: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
struct Alternative {
    transcript: String,
}

impl DeepgramTranscriber {
    /// Create a new Deepgram transcriber pinned to the given language code
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
impl TranscriberPort for DeepgramTranscriber {
    async fn transcribe(&self, audio: &[u8], format: &str) -> Result<String> {
        log::info!(
            "Transcribing {} bytes with Deepgram (format: {}, language: {})",
            audio.len(),
            format,
            self.language
        );

        let params = [
            ("model", DEFAULT_MODEL),
            ("punctuate", "true"),
            ("language", self.language.as_str()),
        ];
        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!("{}/listen?{}", DEEPGRAM_API_BASE, query_string);

        let response = self
            .client
            .post(&url)
            .header("authorization", format!("Token {}", self.api_key))
            .header("content-type", content_type_for(format))
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| AppError::Transcription(format!("Deepgram request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Transcription(format!(
                "Deepgram API error ({}): {}",
                status, error_text
            )));
        }

        let deepgram_response: DeepgramResponse = response.json().await.map_err(|e| {
            AppError::Transcription(format!("Failed to parse Deepgram response: {}", e))
        })?;

        let channel = deepgram_response.results.channels.first().ok_or_else(|| {
            AppError::Transcription("No channels in Deepgram response".to_string())
        })?;
        let alternative = channel.alternatives.first().ok_or_else(|| {
            AppError::Transcription("No alternatives in Deepgram response".to_string())
        })?;

        Ok(alternative.transcript.clone())
    }

    fn provider_name(&self) -> &str {
        "deepgram"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deepgram_transcriber_creation() {
        let transcriber = DeepgramTranscriber::new("test_api_key".to_string(), "el".to_string());
        assert_eq!(transcriber.provider_name(), "deepgram");
        assert!(transcriber.is_configured());
    }

    #[test]
    fn test_deepgram_transcriber_not_configured() {
        let transcriber = DeepgramTranscriber::new("".to_string(), "el".to_string());
        assert!(!transcriber.is_configured());
    }
}
