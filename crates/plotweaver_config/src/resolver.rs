//! Resolution of one agent identity against a configuration document.

use crate::ConfigDocument;
use plotweaver_core::{AgentConfig, GenerationToolConfig};
use tracing::{debug, instrument, warn};

/// Agent id used when neither the caller nor the document names one.
pub const DEFAULT_AGENT_ID: &str = "simple_story_agent_v1";

/// Effective settings for one agent.
///
/// Missing entries never fail resolution: an unknown agent resolves to
/// [`AgentConfig::default`] (generation disabled, empty template bank) and an
/// unknown tool resolves to `None`.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct ResolvedAgent {
    /// Agent identity the settings were resolved for
    agent_id: String,
    /// Path of the document the settings came from, recorded in metadata
    config_path: String,
    /// Agent settings
    agent: AgentConfig,
    /// Tool settings, if the agent references a known tool
    tool: Option<GenerationToolConfig>,
}

impl ResolvedAgent {
    /// Assemble a resolved agent directly.
    pub fn new(
        agent_id: impl Into<String>,
        config_path: impl Into<String>,
        agent: AgentConfig,
        tool: Option<GenerationToolConfig>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            config_path: config_path.into(),
            agent,
            tool,
        }
    }

    /// Whether configuration allows trying the generation service.
    ///
    /// Requires both the agent flag and a resolved tool. Credential
    /// availability is checked separately by the invoker.
    pub fn wants_generation(&self) -> bool {
        *self.agent.use_generation() && self.tool.is_some()
    }

    /// Model to request: agent override, then tool model, then `default_model`.
    pub fn model_name<'a>(&'a self, default_model: &'a str) -> &'a str {
        self.agent
            .model_name()
            .as_deref()
            .or_else(|| self.tool.as_ref().and_then(|t| t.model_name().as_deref()))
            .unwrap_or(default_model)
    }
}

/// Resolves agent identities against a loaded [`ConfigDocument`].
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    document: ConfigDocument,
    config_path: String,
}

impl ConfigResolver {
    /// Create a resolver over a document loaded from `config_path`.
    pub fn new(document: ConfigDocument, config_path: impl Into<String>) -> Self {
        Self {
            document,
            config_path: config_path.into(),
        }
    }

    /// Agent id used when the caller passes none.
    pub fn default_agent_id(&self) -> &str {
        self.document
            .default_agent_id
            .as_deref()
            .unwrap_or(DEFAULT_AGENT_ID)
    }

    /// Resolve the effective settings for `agent_id` (or the default agent).
    #[instrument(skip(self), fields(config_path = %self.config_path))]
    pub fn resolve(&self, agent_id: Option<&str>) -> ResolvedAgent {
        let agent_id = agent_id.unwrap_or_else(|| self.default_agent_id());

        let agent = match self.document.agent(agent_id) {
            Some(entry) => entry.config.clone(),
            None => {
                warn!(
                    agent_id,
                    "Agent not found in configuration, using default agent settings"
                );
                AgentConfig::default()
            }
        };

        let tool = agent.generation_tool_id().as_deref().and_then(|tool_id| {
            let found = self.document.tool(tool_id).map(|entry| entry.config.clone());
            if found.is_none() {
                warn!(
                    agent_id,
                    tool_id, "Generation tool not found in configuration, generation disabled"
                );
            }
            found
        });

        debug!(
            agent_id,
            use_generation = *agent.use_generation(),
            has_tool = tool.is_some(),
            "Resolved agent configuration"
        );

        ResolvedAgent::new(agent_id, self.config_path.clone(), agent, tool)
    }
}
