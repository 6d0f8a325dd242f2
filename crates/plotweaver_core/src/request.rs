//! Request and response types for the generation service.

use serde::{Deserialize, Serialize};

/// One generation request.
///
/// The system and user prompts are kept apart so drivers with native
/// multi-role requests can use them; [`GenerateRequest::combined_prompt`]
/// joins them into the single text block the service receives otherwise.
///
/// # Examples
///
/// ```
/// use plotweaver_core::GenerateRequestBuilder;
///
/// let request = GenerateRequestBuilder::default()
///     .system_prompt("You are a storyteller.")
///     .user_prompt("Genre: SF")
///     .model("gemini-2.0-flash")
///     .temperature(0.7f32)
///     .max_tokens(1000u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.combined_prompt(), "You are a storyteller.\n\nGenre: SF");
/// assert_eq!(*request.max_tokens(), Some(1000));
/// assert!(!*request.json_response());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// System prompt text
    system_prompt: String,
    /// User prompt text
    user_prompt: String,
    /// Model identifier to use
    #[builder(default, setter(into, strip_option))]
    model: Option<String>,
    /// Sampling temperature
    #[builder(default, setter(into, strip_option))]
    temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[builder(default, setter(into, strip_option))]
    max_tokens: Option<u32>,
    /// Ask the service to answer with a JSON document
    #[builder(default)]
    #[serde(default)]
    json_response: bool,
}

impl GenerateRequest {
    /// System and user prompt joined by a blank line.
    pub fn combined_prompt(&self) -> String {
        format!("{}\n\n{}", self.system_prompt, self.user_prompt)
    }
}

/// Raw text returned by the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Response text, possibly JSON-shaped
    pub text: String,
}

impl GenerateResponse {
    /// Wrap response text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
