//! Trait definitions for generation backends.

use async_trait::async_trait;
use plotweaver_core::{GenerateRequest, GenerateResponse};
use plotweaver_error::PlotweaverResult;

/// Core trait that every generation backend implements.
///
/// A driver holds whatever credential it needs; constructing one is the
/// credential check, so a pipeline without a driver never touches the network.
/// Implementations must make exactly one attempt per call and must not retry.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Submit one request and return the raw response text.
    async fn generate(&self, req: &GenerateRequest) -> PlotweaverResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model used when the request does not name one.
    fn model_name(&self) -> &str;
}
