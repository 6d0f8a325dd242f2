//! Google Gemini API implementation.
//!
//! # Example
//!
//! ```no_run
//! use plotweaver_core::GenerateRequestBuilder;
//! use plotweaver_interface::GenerationDriver;
//! use plotweaver_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new("api-key")?.with_default_model("gemini-2.5-flash");
//!
//! let request = GenerateRequestBuilder::default()
//!     .system_prompt("あなたは有能なストーリーテラーです。")
//!     .user_prompt("ジャンル：SF")
//!     .temperature(0.7f32)
//!     .max_tokens(1000u32)
//!     .build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::env;
use tracing::{debug, instrument, warn};

use gemini_rust::{Gemini, client::Model};

use plotweaver_core::{GenerateRequest, GenerateResponse};
use plotweaver_error::{GenerationError, GenerationErrorKind, PlotweaverResult};
use plotweaver_interface::GenerationDriver;

use super::GeminiResult;

/// Environment variable holding the Gemini access key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

const JSON_MIME_TYPE: &str = "application/json";

/// Model used when neither the request nor the client names one.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Client for the Google Gemini API.
///
/// Holding a `GeminiClient` means a credential was available: both
/// constructors fail with [`GenerationErrorKind::CredentialMissing`] before
/// any network access when the key is absent or empty.
#[derive(Clone)]
pub struct GeminiClient {
    /// API key for creating per-model clients
    api_key: String,
    /// Default model name when req.model is None
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client from an explicit access key.
    ///
    /// # Errors
    ///
    /// Returns `CredentialMissing` if the key is empty.
    #[track_caller]
    pub fn new(api_key: impl Into<String>) -> GeminiResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::CredentialMissing));
        }
        Ok(Self {
            api_key,
            model_name: DEFAULT_GEMINI_MODEL.to_string(),
        })
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns `CredentialMissing` if the variable is unset or empty.
    #[instrument(name = "gemini_client_from_env")]
    pub fn from_env() -> GeminiResult<Self> {
        let api_key = env::var(GEMINI_API_KEY_VAR)
            .map_err(|_| GenerationError::new(GenerationErrorKind::CredentialMissing))?;
        Self::new(api_key)
    }

    /// Builder method overriding the default model.
    pub fn with_default_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Unrecognized names use `Model::Custom` with the `models/` prefix the
    /// API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Internal generate method that returns Gemini-specific errors.
    #[instrument(skip(self, req), fields(model))]
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model_name = req.model().as_deref().unwrap_or(&self.model_name);
        tracing::Span::current().record("model", model_name);

        let client = Gemini::with_model(&self.api_key, Self::model_name_to_enum(model_name))
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string()))
            })?;

        let prompt = req.combined_prompt();
        debug!(
            prompt_preview = %prompt.chars().take(200).collect::<String>(),
            "Submitting combined prompt"
        );

        let mut builder = client.generate_content().with_user_message(&prompt);

        if let Some(temperature) = req.temperature() {
            builder = builder.with_temperature(*temperature);
        }

        if let Some(max_tokens) = req.max_tokens() {
            builder = builder.with_max_output_tokens(Self::output_token_limit(*max_tokens));
        }

        if *req.json_response() {
            builder = builder.with_response_mime_type(JSON_MIME_TYPE);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;

        let text = response.text();
        if text.trim().is_empty() {
            warn!("Gemini returned no text");
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse));
        }

        debug!(response_length = text.len(), "Gemini response received");
        Ok(GenerateResponse::new(text))
    }

    /// The API takes a signed limit; larger values saturate.
    fn output_token_limit(max_tokens: u32) -> i32 {
        i32::try_from(max_tokens).unwrap_or(i32::MAX)
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GenerationError {
        let err_msg = err.to_string();

        // e.g. "bad response from server; code 503; description: ..."
        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GenerationError::new(GenerationErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GenerationError::new(GenerationErrorKind::ServiceCallFailed(err_msg))
        }
    }

    /// Extract HTTP status code from error message string.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        let code_start = error_msg.find("code ")?;
        let code_str = &error_msg[code_start + 5..];
        let end = code_str
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(code_str.len());
        code_str[..end].parse().ok()
    }
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> PlotweaverResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
