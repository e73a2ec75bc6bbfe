/// Transcriber port trait
///
/// Defines the interface for speech-to-text services over a single finite
/// audio clip. One provider is active at a time, chosen at deployment time;
/// there is no runtime fallback chain and no streaming.
/// Implementations: OpenAI Whisper, Deepgram.
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for transcription services
#[async_trait]
pub trait TranscriberPort: Send + Sync {
    /// Transcribe a complete audio clip into plain text.
    ///
    /// `format` is the clip's container format ("wav", "webm", "mp3", ...).
    /// The target language is fixed at construction; no partial results are
    /// exposed and upstream failures are surfaced, never retried.
    async fn transcribe(&self, audio: &[u8], format: &str) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}

/// Map an audio container format to its MIME content type.
///
/// Unknown formats fall back to WAV, matching what the capture UI records.
pub(crate) fn content_type_for(format: &str) -> &'static str {
    match format {
        "wav" => "audio/wav",
        "webm" => "audio/webm",
        "mp3" => "audio/mpeg",
        "mp4" | "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "audio/wav",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_mapping() {
        assert_eq!(content_type_for("webm"), "audio/webm");
        assert_eq!(content_type_for("mp3"), "audio/mpeg");
        assert_eq!(content_type_for("unknown"), "audio/wav");
    }
}
