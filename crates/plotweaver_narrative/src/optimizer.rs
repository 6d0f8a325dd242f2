//! Plot improvement suggestions from the generation service.

use crate::{GenerationInvoker, GenerationParams, PromptAssembler, parse_json, strip_code_fence};
use plotweaver_config::ResolvedAgent;
use plotweaver_core::{Plot, PromptPurpose};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Reply when the agent disables the generation service.
pub const GENERATION_DISABLED_TEXT: &str = "LLMを使用しない設定です。";

/// Reply when the agent has no usable tool config.
pub const TOOL_MISSING_TEXT: &str = "LLMツール設定が不十分です。";

/// One observation about the plot and what to change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisPoint {
    /// What was observed
    #[serde(default)]
    pub point: String,
    /// Proposed change
    #[serde(default)]
    pub suggestion: String,
}

/// Suggestions for a plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// The service answered with the expected JSON shape
    Structured {
        /// Point-by-point analysis
        analysis_points: Vec<AnalysisPoint>,
        /// Summary recommendation
        overall_suggestion: Option<String>,
    },
    /// Free-text suggestion, or a notice explaining why none was requested
    Text(String),
}

#[derive(Deserialize)]
struct SuggestionPayload {
    #[serde(default)]
    analysis_points: Option<Vec<AnalysisPoint>>,
    #[serde(default)]
    overall_suggestion: Option<String>,
}

impl Suggestion {
    /// Interpret raw service output.
    ///
    /// A JSON object carrying `analysis_points` or `overall_suggestion` is
    /// `Structured`; anything else becomes `Text` holding the fence-stripped
    /// output.
    pub fn from_response(raw: &str) -> Self {
        let cleaned = strip_code_fence(raw);
        match parse_json::<SuggestionPayload>(cleaned) {
            Ok(SuggestionPayload {
                analysis_points,
                overall_suggestion,
            }) if analysis_points.is_some() || overall_suggestion.is_some() => {
                Suggestion::Structured {
                    analysis_points: analysis_points.unwrap_or_default(),
                    overall_suggestion,
                }
            }
            _ => Suggestion::Text(cleaned.to_string()),
        }
    }
}

/// Render a plot as the summary text substituted for `{plot_summary}`.
///
/// # Examples
///
/// ```
/// use plotweaver_core::Plot;
/// use plotweaver_narrative::plot_summary;
///
/// let plot = Plot::new("村が襲われる", "仲間割れ", "勇者が覚醒する");
/// assert_eq!(plot_summary(&plot), "導入：村が襲われる\n葛藤：仲間割れ\n解決：勇者が覚醒する");
/// ```
pub fn plot_summary(plot: &Plot) -> String {
    format!(
        "導入：{}\n葛藤：{}\n解決：{}",
        plot.setup, plot.conflict, plot.resolution
    )
}

/// Asks the generation service to critique an existing plot.
///
/// Uses the `plot_optimization` prompt purpose. The model is the agent's
/// override, then the tool's model, then the default model.
#[derive(Debug, Clone)]
pub struct PlotOptimizer {
    resolved: ResolvedAgent,
    invoker: GenerationInvoker,
    default_model: String,
}

impl PlotOptimizer {
    /// Create an optimizer for a resolved agent.
    pub fn new(resolved: ResolvedAgent, invoker: GenerationInvoker) -> Self {
        Self {
            resolved,
            invoker,
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Builder method overriding the model used when configuration names none.
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Suggest improvements for `plot`.
    ///
    /// Returns a `Text` notice without calling the service when the agent
    /// disables generation or has no tool config, and `None` when the call
    /// itself fails or the prompt template is invalid.
    #[instrument(skip(self, plot), fields(agent_id = %self.resolved.agent_id()))]
    pub async fn analyze(&self, plot: &Plot, genre: &str) -> Option<Suggestion> {
        if !*self.resolved.agent().use_generation() {
            info!("Agent does not use the generation service");
            return Some(Suggestion::Text(GENERATION_DISABLED_TEXT.to_string()));
        }

        let Some(params) = GenerationParams::from_agent(&self.resolved, &self.default_model)
        else {
            warn!("No tool config resolved for plot optimization");
            return Some(Suggestion::Text(TOOL_MISSING_TEXT.to_string()));
        };

        let summary = plot_summary(plot);
        let prompt = match PromptAssembler::for_agent(&self.resolved).assemble(
            PromptPurpose::PlotOptimization,
            genre,
            Some(&summary),
        ) {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!(error = %e, "Invalid plot optimization template");
                return None;
            }
        };

        match self.invoker.invoke(&prompt, &params).await {
            Ok(text) => Some(Suggestion::from_response(&text)),
            Err(e) => {
                warn!(error = %e, "Plot optimization call failed");
                None
            }
        }
    }
}
