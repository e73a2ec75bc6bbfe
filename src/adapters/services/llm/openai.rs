//! OpenAI interpreter adapter
//!
//! Implements the InterpreterPort for OpenAI's Chat Completions API. Same
//! prompt and wire contract as the Anthropic adapter; only the transport
//! shape differs.

use crate::domain::models::Interpretation;
use crate::domain::prompts::InterpreterPrompt;
use crate::error::{AppError, Result};
use crate::ports::interpreter::{parse_interpretation, InterpreterPort};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 500;

/// OpenAI interpreter implementation
pub struct OpenAIInterpreter {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAIInterpreter {
    /// Create a new OpenAI interpreter with the given API key
    pub fn new(api_key: String, model: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl InterpreterPort for OpenAIInterpreter {
    async fn interpret(&self, word: &str) -> Result<Interpretation> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: InterpreterPrompt::system().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: word.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
        };

        log::info!("Interpreting token with OpenAI model {}", self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", OPENAI_API_BASE))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Interpretation(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Interpretation(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::Interpretation(format!("Failed to parse completion response: {}", e))
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Interpretation("No choices returned".to_string()))?;

        parse_interpretation(&choice.message.content)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
