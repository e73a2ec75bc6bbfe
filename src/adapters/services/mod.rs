//! Service adapters for the interpretation and transcription ports
pub mod asr;
pub mod llm;
