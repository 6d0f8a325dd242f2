//! The canonical content record.

use crate::ContentMetadata;
use serde::{Deserialize, Serialize};

/// One cast member.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Character {
    /// Character name
    #[serde(default)]
    pub name: String,
    /// Narrative role (protagonist, support, antagonist, ...)
    #[serde(default)]
    pub role: String,
    /// Short description
    #[serde(default)]
    pub description: String,
}

impl Character {
    /// Create a character.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            description: description.into(),
        }
    }
}

/// Three-act plot. All keys are always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Plot {
    /// Opening situation
    #[serde(default)]
    pub setup: String,
    /// Central conflict
    #[serde(default)]
    pub conflict: String,
    /// Ending
    #[serde(default)]
    pub resolution: String,
}

impl Plot {
    /// Create a plot.
    pub fn new(
        setup: impl Into<String>,
        conflict: impl Into<String>,
        resolution: impl Into<String>,
    ) -> Self {
        Self {
            setup: setup.into(),
            conflict: conflict.into(),
            resolution: resolution.into(),
        }
    }

    /// The plot fields in narrative order.
    pub fn sections(&self) -> [&str; 3] {
        [
            self.setup.as_str(),
            self.conflict.as_str(),
            self.resolution.as_str(),
        ]
    }
}

/// Structured narrative content produced by a pipeline run.
///
/// Both the generation path and the template fallback produce this exact
/// shape, so downstream consumers never need to know which path ran.
///
/// # Examples
///
/// ```
/// use plotweaver_core::{ContentMetadata, ContentStructure};
///
/// let content = ContentStructure::empty("SF", ContentMetadata::new("agent", "config.yaml"));
/// let json = serde_json::to_value(&content).unwrap();
/// for key in ["title", "characters", "plot", "themes", "genre", "metadata"] {
///     assert!(json.get(key).is_some());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentStructure {
    /// Story title
    pub title: String,
    /// Cast, in presentation order
    pub characters: Vec<Character>,
    /// Plot outline
    pub plot: Plot,
    /// Themes, possibly empty
    pub themes: Vec<String>,
    /// Requested genre
    pub genre: String,
    /// Run metadata
    pub metadata: ContentMetadata,
}

impl ContentStructure {
    /// A record with empty narrative fields.
    pub fn empty(genre: impl Into<String>, metadata: ContentMetadata) -> Self {
        Self {
            title: String::new(),
            characters: Vec::new(),
            plot: Plot::default(),
            themes: Vec::new(),
            genre: genre.into(),
            metadata,
        }
    }
}
