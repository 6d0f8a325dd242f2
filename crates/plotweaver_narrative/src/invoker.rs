//! Single-attempt invocation of the generation service.

use crate::AssembledPrompt;
use plotweaver_config::ResolvedAgent;
use plotweaver_core::GenerateRequestBuilder;
use plotweaver_error::{
    BuilderError, GenerationError, GenerationErrorKind, PlotweaverResult,
};
use plotweaver_interface::GenerationDriver;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Sampling parameters for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Model to request
    pub model_name: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Output token cap
    pub max_output_tokens: u32,
    /// Request a JSON document instead of free text
    pub json_response: bool,
}

impl GenerationParams {
    /// Parameters for a resolved agent, or `None` if it has no tool config.
    ///
    /// The model is the agent's override, then the tool's model, then
    /// `default_model`.
    pub fn from_agent(resolved: &ResolvedAgent, default_model: &str) -> Option<Self> {
        let tool = resolved.tool().as_ref()?;
        Some(Self {
            model_name: resolved.model_name(default_model).to_string(),
            temperature: *tool.temperature(),
            max_output_tokens: *tool.max_output_tokens(),
            json_response: false,
        })
    }

    /// Builder method asking the service for a JSON document.
    pub fn expecting_json(mut self) -> Self {
        self.json_response = true;
        self
    }
}

/// Makes at most one call to the generation service per invocation.
///
/// The driver is passed in explicitly; an invoker built with `None` stands
/// for "no credential available" and fails every call with
/// `CredentialMissing` before touching the network.
#[derive(Clone, Default)]
pub struct GenerationInvoker {
    driver: Option<Arc<dyn GenerationDriver>>,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for GenerationInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationInvoker")
            .field("provider", &self.driver.as_ref().map(|d| d.provider_name()))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GenerationInvoker {
    /// Create an invoker around an optional driver.
    pub fn new(driver: Option<Arc<dyn GenerationDriver>>) -> Self {
        Self {
            driver,
            timeout: None,
        }
    }

    /// Builder method bounding each call by `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Submit the prompt once and return the raw response text.
    ///
    /// # Errors
    ///
    /// - `CredentialMissing` if no driver is configured
    /// - `Timeout` if the configured deadline elapses
    /// - `EmptyResponse` if the service answers with blank text
    /// - any error the driver reports, unchanged
    #[instrument(skip(self, prompt), fields(model = %params.model_name))]
    pub async fn invoke(
        &self,
        prompt: &AssembledPrompt,
        params: &GenerationParams,
    ) -> PlotweaverResult<String> {
        let driver = self
            .driver
            .as_ref()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::CredentialMissing))?;

        let request = GenerateRequestBuilder::default()
            .system_prompt(prompt.system.as_str())
            .user_prompt(prompt.user.as_str())
            .model(params.model_name.as_str())
            .temperature(params.temperature)
            .max_tokens(params.max_output_tokens)
            .json_response(params.json_response)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        debug!(
            provider = driver.provider_name(),
            prompt_preview = %request.combined_prompt().chars().take(200).collect::<String>(),
            "Invoking generation service"
        );

        let call = driver.generate(&request);
        let response = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                warn!(timeout_secs = limit.as_secs(), "Generation call timed out");
                GenerationError::new(GenerationErrorKind::Timeout(limit.as_secs()))
            })??,
            None => call.await?,
        };

        if response.text.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse).into());
        }

        debug!(response_length = response.text.len(), "Generation service responded");
        Ok(response.text)
    }
}
