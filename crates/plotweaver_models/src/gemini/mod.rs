//! Google Gemini REST client.
//!
//! One request per call: the client builds a model-specific `gemini_rust`
//! client, submits the combined prompt and returns the response text. There
//! is no retry and no rate limiting.

mod client;

pub use client::{GeminiClient, DEFAULT_GEMINI_MODEL, GEMINI_API_KEY_VAR};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, plotweaver_error::GenerationError>;
