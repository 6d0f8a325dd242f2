//! Settings and collaborators shared by the command handlers.

use plotweaver::{
    ConfigDocument, ConfigResolver, GenerationInvoker, PlotweaverResult, PlotweaverSettings,
};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Everything a command needs before it runs.
#[derive(Debug)]
pub struct AppContext {
    settings: PlotweaverSettings,
    config_path: PathBuf,
}

impl AppContext {
    /// Load settings, letting `config_override` replace the agent document path.
    pub fn load(config_override: Option<PathBuf>) -> PlotweaverResult<Self> {
        let settings = PlotweaverSettings::load()?;
        let config_path = config_override.unwrap_or_else(|| settings.agent_config_path.clone());
        Ok(Self {
            settings,
            config_path,
        })
    }

    /// Application settings.
    pub fn settings(&self) -> &PlotweaverSettings {
        &self.settings
    }

    /// Resolver over the agent document.
    ///
    /// An unreadable document is logged and replaced by an empty one, so
    /// every agent resolves to defaults and runs offline.
    pub fn resolver(&self) -> ConfigResolver {
        let document = load_document(&self.config_path);
        ConfigResolver::new(document, self.config_path.display().to_string())
    }

    /// Invoker backed by the configured generation driver, if a credential exists.
    pub fn invoker(&self) -> GenerationInvoker {
        GenerationInvoker::new(driver(&self.settings)).with_timeout(self.settings.request_timeout())
    }
}

fn load_document(path: &Path) -> ConfigDocument {
    match ConfigDocument::from_file(path) {
        Ok(document) => {
            info!(path = %path.display(), agents = document.agents.len(), "Loaded agent configuration");
            document
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to load agent configuration, using defaults");
            ConfigDocument::default()
        }
    }
}

#[cfg(feature = "gemini")]
fn driver(
    settings: &PlotweaverSettings,
) -> Option<std::sync::Arc<dyn plotweaver::GenerationDriver>> {
    match plotweaver::GeminiClient::from_env() {
        Ok(client) => {
            let driver: std::sync::Arc<dyn plotweaver::GenerationDriver> = std::sync::Arc::new(
                client.with_default_model(settings.default_model.as_str()),
            );
            Some(driver)
        }
        Err(e) => {
            warn!(error = %e, "Generation service unavailable, stories will use templates");
            None
        }
    }
}

#[cfg(not(feature = "gemini"))]
fn driver(
    _settings: &PlotweaverSettings,
) -> Option<std::sync::Arc<dyn plotweaver::GenerationDriver>> {
    warn!("Built without a generation provider, stories will use templates");
    None
}
