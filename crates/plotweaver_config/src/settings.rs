//! Application settings.
//!
//! Settings are merged from, lowest precedence first:
//! - Bundled defaults (include_str! from plotweaver.toml)
//! - `~/.config/plotweaver/plotweaver.toml`
//! - `./plotweaver.toml`
//! - `PLOTWEAVER_*` environment variables (e.g. `PLOTWEAVER_STORIES_DIR`)

use config::{Config, Environment, File, FileFormat};
use plotweaver_error::{ConfigError, PlotweaverError, PlotweaverResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_SETTINGS: &str = include_str!("../plotweaver.toml");

/// `PLOTWEAVER_<KEY>` overrides; nested keys would use `__`.
fn environment() -> Environment {
    Environment::with_prefix("PLOTWEAVER")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Paths and limits for a Plotweaver run.
///
/// # Example
///
/// ```no_run
/// use plotweaver_config::PlotweaverSettings;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = PlotweaverSettings::load()?;
/// println!("Stories go to {}", settings.stories_dir.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotweaverSettings {
    /// Agent configuration document
    pub agent_config_path: PathBuf,
    /// Output directory for story artifacts
    pub stories_dir: PathBuf,
    /// Root directory of per-agent character rosters
    pub roster_dir: PathBuf,
    /// Deadline for one generation call; `None` or 0 waits indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Model used when neither agent nor tool names one
    pub default_model: String,
}

impl PlotweaverSettings {
    /// Load settings with precedence: env > current dir > home dir > bundled defaults.
    #[instrument(name = "load_settings")]
    pub fn load() -> PlotweaverResult<Self> {
        debug!("Loading settings with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/plotweaver/plotweaver.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("plotweaver").required(false))
            .add_source(environment());

        Self::finish(builder)
    }

    /// Load bundled defaults overridden by one explicit file.
    pub fn from_file(path: impl AsRef<Path>) -> PlotweaverResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> PlotweaverResult<Self> {
        builder
            .build()
            .map_err(|e| {
                PlotweaverError::from(ConfigError::new(format!(
                    "Failed to build settings: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                PlotweaverError::from(ConfigError::new(format!(
                    "Failed to parse settings: {}",
                    e
                )))
            })
    }

    /// Generation deadline, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Default for PlotweaverSettings {
    fn default() -> Self {
        Self {
            agent_config_path: PathBuf::from("config/agent_config.yaml"),
            stories_dir: PathBuf::from("stories"),
            roster_dir: PathBuf::from("data"),
            request_timeout_secs: Some(60),
            default_model: "gemini-2.0-flash".to_string(),
        }
    }
}
