/// Domain layer - core business models
///
/// These models are transport-agnostic and represent core business entities.
pub mod models;
pub mod prompts;

pub use models::{Book, Interpretation, Word, WordEntry, WordWithBook};
pub use prompts::InterpreterPrompt;
