//! Anthropic interpreter adapter
//!
//! Implements the InterpreterPort for Anthropic's Messages API (Claude
//! models). The fixed interpreter prompt goes in the system slot and the
//! captured token is the only user message.

use crate::domain::models::Interpretation;
use crate::domain::prompts::InterpreterPrompt;
use crate::error::{AppError, Result};
use crate::ports::interpreter::{parse_interpretation, InterpreterPort};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
// One word in, one short entry out
const MAX_TOKENS: u32 = 500;

/// Anthropic interpreter implementation
pub struct AnthropicInterpreter {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    system: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: String,
}

impl AnthropicInterpreter {
    /// Create a new Anthropic interpreter with the given API key
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
impl InterpreterPort for AnthropicInterpreter {
    async fn interpret(&self, word: &str) -> Result<Interpretation> {
        let request_body = MessagesRequest {
            model: self.model.clone(),
            system: InterpreterPrompt::system().to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: word.to_string(),
            }],
            max_tokens: MAX_TOKENS,
        };

        log::info!("Interpreting token with Anthropic model {}", self.model);

        let response = self
            .client
            .post(format!("{}/messages", ANTHROPIC_API_BASE))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Interpretation(format!("Messages request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Interpretation(format!(
                "Anthropic API error ({}): {}",
                status, error_text
            )));
        }

        let messages_response: MessagesResponse = response.json().await.map_err(|e| {
            AppError::Interpretation(format!("Failed to parse messages response: {}", e))
        })?;

        let block = messages_response.content.into_iter().next().ok_or_else(|| {
            AppError::Interpretation("No content blocks returned".to_string())
        })?;

        if block.block_type != "text" {
            return Err(AppError::Interpretation(format!(
                "Unexpected content block type: {}",
                block.block_type
            )));
        }

        parse_interpretation(&block.text)
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
