//! Run metadata attached to every produced content record.

use chrono::{DateTime, Local};
use plotweaver_error::{BuilderError, BuilderErrorKind};
use serde::{Deserialize, Serialize};

/// Which path produced a content record.
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
#[serde(rename_all = "lowercase")]
pub enum GenerationType {
    /// Parsed from generation-service output
    #[display("llm")]
    Llm,
    /// Built by the template fallback
    #[display("template")]
    Template,
}

/// Metadata merged into a content record before persistence.
///
/// `timestamp` and `generation_type` start empty and are written exactly once
/// by [`ContentMetadata::finalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMetadata {
    /// Version tag of the producing agent
    pub agent_version: String,
    /// Agent identity the run was resolved for
    pub agent_id: String,
    /// Path of the configuration document
    pub config_path: String,
    /// Generation instant
    pub timestamp: Option<DateTime<Local>>,
    /// Provenance of the record
    pub generation_type: Option<GenerationType>,
}

impl ContentMetadata {
    /// Metadata for a fresh run, not yet finalized.
    pub fn new(agent_id: impl Into<String>, config_path: impl Into<String>) -> Self {
        Self {
            agent_version: "v0.1".to_string(),
            agent_id: agent_id.into(),
            config_path: config_path.into(),
            timestamp: None,
            generation_type: None,
        }
    }

    /// Whether provenance and timestamp have been written.
    pub fn is_finalized(&self) -> bool {
        self.generation_type.is_some() && self.timestamp.is_some()
    }

    /// Record the generation instant and provenance.
    ///
    /// # Errors
    ///
    /// Returns an error if provenance was already recorded for this run.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Local;
    /// use plotweaver_core::{ContentMetadata, GenerationType};
    ///
    /// let mut metadata = ContentMetadata::new("simple_story_agent_v1", "agent_config.yaml");
    /// metadata.finalize(GenerationType::Template, Local::now()).unwrap();
    /// assert!(metadata.is_finalized());
    /// assert!(metadata.finalize(GenerationType::Llm, Local::now()).is_err());
    /// ```
    #[track_caller]
    pub fn finalize(
        &mut self,
        generation_type: GenerationType,
        timestamp: DateTime<Local>,
    ) -> Result<(), BuilderError> {
        if let Some(existing) = self.generation_type {
            return Err(BuilderError::new(BuilderErrorKind::AlreadyRecorded {
                field: "generation_type",
                existing: existing.to_string(),
            }));
        }
        self.generation_type = Some(generation_type);
        self.timestamp = Some(timestamp);
        Ok(())
    }
}
