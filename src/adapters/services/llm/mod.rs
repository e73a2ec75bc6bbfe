//! LLM interpreter adapters
//!
//! Implementations of the InterpreterPort trait:
//! - Anthropic (Claude)
//! - OpenAI (GPT)

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicInterpreter;
pub use openai::OpenAIInterpreter;

use crate::config::InterpreterConfig;
use crate::error::{AppError, Result};
use crate::ports::interpreter::InterpreterPort;

/// Create the configured interpreter provider.
///
/// Exactly one provider is active per deployment; an unknown name is a
/// wiring-time error, not a request-time one.
pub fn interpreter_from_config(config: &InterpreterConfig) -> Result<Box<dyn InterpreterPort>> {
    match config.provider.as_str() {
        "anthropic" => Ok(Box::new(AnthropicInterpreter::new(
            config.api_key.clone(),
            config.model.clone(),
        ))),
        "openai" => Ok(Box::new(OpenAIInterpreter::new(
            config.api_key.clone(),
            config.model.clone(),
        ))),
        other => Err(AppError::Config(format!(
            "Unknown interpreter provider: {}",
            other
        ))),
    }
}
