//! The agent configuration document.

use plotweaver_core::{AgentConfig, GenerationToolConfig};
use plotweaver_error::{ConfigError, PlotweaverResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// One named agent in the document's `agents` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentEntry {
    /// Agent identity
    pub id: String,
    /// Agent settings
    #[serde(default)]
    pub config: AgentConfig,
}

/// One named generation tool in the document's `tools` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolEntry {
    /// Tool identity referenced by `generation_tool_id`
    pub id: String,
    /// Client parameters
    #[serde(default)]
    pub config: GenerationToolConfig,
}

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension. Unknown extensions are read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => DocumentFormat::Toml,
            Some("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Parsed agent configuration document.
///
/// Unrecognized top-level keys (global options of other tools) are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Agent used when the caller names none
    #[serde(default)]
    pub default_agent_id: Option<String>,
    /// Named generation tools
    #[serde(default)]
    pub tools: Vec<ToolEntry>,
    /// Named agents
    #[serde(default)]
    pub agents: Vec<AgentEntry>,
}

impl ConfigDocument {
    /// Load a document from disk, choosing the parser by file extension.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or parsed.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PlotweaverResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let format = DocumentFormat::from_path(path);
        debug!(?format, bytes = contents.len(), "Parsing configuration document");
        Self::from_str_with_format(&contents, format)
    }

    /// Parse a document in the given format.
    pub fn from_str_with_format(contents: &str, format: DocumentFormat) -> PlotweaverResult<Self> {
        match format {
            DocumentFormat::Yaml => Self::from_yaml_str(contents),
            DocumentFormat::Toml => Self::from_toml_str(contents),
            DocumentFormat::Json => Self::from_json_str(contents),
        }
    }

    /// Parse a YAML document. An empty document yields the default.
    pub fn from_yaml_str(contents: &str) -> PlotweaverResult<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let document = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::new(format!("Failed to parse YAML configuration: {}", e)))?;
        Ok(document)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(contents: &str) -> PlotweaverResult<Self> {
        let document = toml::from_str(contents)
            .map_err(|e| ConfigError::new(format!("Failed to parse TOML configuration: {}", e)))?;
        Ok(document)
    }

    /// Parse a JSON document.
    pub fn from_json_str(contents: &str) -> PlotweaverResult<Self> {
        let document = serde_json::from_str(contents)
            .map_err(|e| ConfigError::new(format!("Failed to parse JSON configuration: {}", e)))?;
        Ok(document)
    }

    /// Agent entry with the given id.
    pub fn agent(&self, id: &str) -> Option<&AgentEntry> {
        self.agents.iter().find(|entry| entry.id == id)
    }

    /// Tool entry with the given id.
    pub fn tool(&self, id: &str) -> Option<&ToolEntry> {
        self.tools.iter().find(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/agent_config.yml")),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("agents.TOML")),
            DocumentFormat::Toml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("agents.json")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("agents")),
            DocumentFormat::Yaml
        );
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let document = ConfigDocument::from_yaml_str("  \n").unwrap();
        assert!(document.agents.is_empty());
        assert!(document.tools.is_empty());
    }

    #[test]
    fn test_genre_keys_keep_case() {
        let yaml = r#"
agents:
  - id: a
    config:
      story_templates:
        SF:
          setup: 宇宙
"#;
        let document = ConfigDocument::from_yaml_str(yaml).unwrap();
        let agent = document.agent("a").unwrap();
        assert!(agent.config.template_bank().contains_key("SF"));
    }

    #[test]
    fn test_toml_document() {
        let toml = r#"
default_agent_id = "a"

[[tools]]
id = "t"
[tools.config]
max_tokens = 1500

[[agents]]
id = "a"
[agents.config]
use_generation = true
generation_tool_id = "t"
"#;
        let document = ConfigDocument::from_toml_str(toml).unwrap();
        assert_eq!(document.default_agent_id.as_deref(), Some("a"));
        assert_eq!(*document.tool("t").unwrap().config.max_output_tokens(), 1500);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = ConfigDocument::from_json_str("{ not json").unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse JSON configuration"));
    }
}
