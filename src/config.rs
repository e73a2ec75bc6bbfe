//! Deployment-time configuration
//!
//! Everything the engine needs is taken from the environment once, at
//! startup: the database path, the shared secret, and which interpretation
//! and transcription providers are active. Provider choice is fixed per
//! deployment; there is no runtime fallback chain.

use crate::error::{AppError, Result};
use std::env;
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "lexis.db";
const DEFAULT_LANGUAGE: &str = "el";

/// Interpreter provider selection
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// "anthropic" or "openai"
    pub provider: String,
    pub api_key: String,
    /// Override of the provider's default model
    pub model: Option<String>,
}

/// Transcriber provider selection
#[derive(Debug, Clone)]
pub struct TranscriberConfig {
    /// "whisper" or "deepgram"
    pub provider: String,
    pub api_key: String,
    /// Source-language code the transcript is constrained to
    pub language: String,
}

/// Full engine configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Shared secret every operation is checked against
    pub auth_password: String,
    pub interpreter: InterpreterConfig,
    pub transcriber: TranscriberConfig,
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_or_empty(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// A missing or empty `AUTH_PASSWORD` and an unknown provider name are
    /// startup errors; a missing API key is not (the adapter reports itself
    /// unconfigured and upstream calls fail when attempted).
    pub fn from_env() -> Result<Self> {
        let auth_password = env_or_empty("AUTH_PASSWORD").trim().to_string();
        if auth_password.is_empty() {
            return Err(AppError::Config(
                "AUTH_PASSWORD must be set to a non-empty secret".to_string(),
            ));
        }

        let interpreter_provider = env_or("LEXIS_INTERPRETER_PROVIDER", "anthropic");
        let interpreter_key = match interpreter_provider.as_str() {
            "anthropic" => env_or_empty("ANTHROPIC_API_KEY"),
            "openai" => env_or_empty("OPENAI_API_KEY"),
            other => {
                return Err(AppError::Config(format!(
                    "Unknown interpreter provider: {}",
                    other
                )))
            }
        };

        let transcriber_provider = env_or("LEXIS_TRANSCRIBER_PROVIDER", "whisper");
        let transcriber_key = match transcriber_provider.as_str() {
            "whisper" => env_or_empty("OPENAI_API_KEY"),
            "deepgram" => env_or_empty("DEEPGRAM_API_KEY"),
            other => {
                return Err(AppError::Config(format!(
                    "Unknown transcriber provider: {}",
                    other
                )))
            }
        };

        Ok(Self {
            db_path: PathBuf::from(env_or("LEXIS_DB_PATH", DEFAULT_DB_PATH)),
            auth_password,
            interpreter: InterpreterConfig {
                provider: interpreter_provider,
                api_key: interpreter_key,
                model: env::var("LEXIS_INTERPRETER_MODEL").ok(),
            },
            transcriber: TranscriberConfig {
                provider: transcriber_provider,
                api_key: transcriber_key,
                language: env_or("LEXIS_LANGUAGE", DEFAULT_LANGUAGE),
            },
        })
    }
}
