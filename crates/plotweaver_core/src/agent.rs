//! Agent and generation-tool configuration records.
//!
//! Both records are deserialized from the `config` sub-tree of an entry in the
//! agent configuration document. Field aliases accept the key names used by
//! older documents (`use_llm`, `story_templates`, `llm_tool_id`, `max_tokens`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Plot template for one genre in an agent's template bank.
///
/// Every field is optional; a missing field falls back to the built-in
/// default prose for that field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlotTemplate {
    /// Opening situation
    #[serde(default)]
    pub setup: Option<String>,
    /// Central conflict, may contain `{genre}`
    #[serde(default)]
    pub conflict: Option<String>,
    /// Ending
    #[serde(default)]
    pub resolution: Option<String>,
}

impl PlotTemplate {
    /// Create a template with all three fields set.
    pub fn new(
        setup: impl Into<String>,
        conflict: impl Into<String>,
        resolution: impl Into<String>,
    ) -> Self {
        Self {
            setup: Some(setup.into()),
            conflict: Some(conflict.into()),
            resolution: Some(resolution.into()),
        }
    }
}

/// System and user prompt templates for one purpose.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptTemplatePair {
    /// System prompt template
    #[serde(default)]
    pub system: Option<String>,
    /// User prompt template
    #[serde(default)]
    pub user: Option<String>,
}

/// What a prompt is being assembled for.
///
/// The purpose selects the entry in [`GenerationToolConfig::prompt_templates`]
/// and the hard-coded defaults used when configuration is silent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum PromptPurpose {
    /// Generate a complete story structure for a genre
    #[display("story")]
    Story,
    /// Suggest improvements to an existing plot
    #[display("plot_optimization")]
    PlotOptimization,
}

impl PromptPurpose {
    /// Key of this purpose in a tool's `prompt_templates` mapping.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptPurpose::Story => "story",
            PromptPurpose::PlotOptimization => "plot_optimization",
        }
    }
}

/// Identity-scoped settings for one agent.
///
/// # Examples
///
/// ```
/// use plotweaver_core::{AgentConfig, AgentConfigBuilder};
///
/// let config = AgentConfigBuilder::default()
///     .use_generation(true)
///     .generation_tool_id("llm_tool_gemini_pro")
///     .build()
///     .unwrap();
///
/// assert!(*config.use_generation());
/// assert_eq!(config.generation_tool_id().as_deref(), Some("llm_tool_gemini_pro"));
/// assert!(AgentConfig::default().template_bank().is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default)]
pub struct AgentConfig {
    /// Whether the generation service should be tried at all
    #[serde(default, alias = "use_llm")]
    use_generation: bool,

    /// Model override; wins over the tool's model name
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    model_name: Option<String>,

    /// User prompt template literal
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    prompt_template: Option<String>,

    /// System prompt literal
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    system_prompt: Option<String>,

    /// Genre → plot template, with an optional `"default"` entry
    #[serde(default, alias = "story_templates")]
    #[builder(setter(into))]
    template_bank: HashMap<String, PlotTemplate>,

    /// Id of the entry in the document's `tools` list
    #[serde(default, alias = "llm_tool_id")]
    #[builder(setter(into, strip_option))]
    generation_tool_id: Option<String>,
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    1000
}

/// Shared client parameters for the generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationToolConfig {
    /// Model name used when the agent does not override it
    #[serde(default)]
    model_name: Option<String>,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    temperature: f32,

    /// Output token cap
    #[serde(default = "default_max_output_tokens", alias = "max_tokens")]
    max_output_tokens: u32,

    /// Purpose key → prompt templates
    #[serde(default)]
    prompt_templates: HashMap<String, PromptTemplatePair>,
}

impl Default for GenerationToolConfig {
    fn default() -> Self {
        Self {
            model_name: None,
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            prompt_templates: HashMap::new(),
        }
    }
}

impl GenerationToolConfig {
    /// Create a tool configuration with explicit sampling parameters.
    pub fn new(model_name: Option<String>, temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            model_name,
            temperature,
            max_output_tokens,
            prompt_templates: HashMap::new(),
        }
    }

    /// Builder method adding the templates for one purpose.
    pub fn with_templates(mut self, purpose: PromptPurpose, templates: PromptTemplatePair) -> Self {
        self.prompt_templates
            .insert(purpose.as_str().to_string(), templates);
        self
    }

    /// Templates registered for `purpose`, if any.
    pub fn templates_for(&self, purpose: PromptPurpose) -> Option<&PromptTemplatePair> {
        self.prompt_templates.get(purpose.as_str())
    }
}
