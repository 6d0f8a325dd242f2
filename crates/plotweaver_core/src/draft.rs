//! Transient results of a generation attempt.

use crate::{Character, ContentMetadata, ContentStructure, Plot};
use plotweaver_error::{ResponseError, ResponseErrorKind};
use serde::{Deserialize, Serialize};

/// Keys a parsed response must carry to become a full [`ContentStructure`].
pub const REQUIRED_CONTENT_FIELDS: [&str; 4] = ["title", "characters", "plot", "themes"];

/// Content fields as parsed from generation-service output.
///
/// Every field is optional because the service is free to omit keys; use
/// [`ContentDraft::into_content`] to enforce the full shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentDraft {
    /// Story title
    #[serde(default)]
    pub title: Option<String>,
    /// Cast
    #[serde(default)]
    pub characters: Option<Vec<Character>>,
    /// Plot outline
    #[serde(default)]
    pub plot: Option<Plot>,
    /// Themes
    #[serde(default)]
    pub themes: Option<Vec<String>>,
}

impl ContentDraft {
    /// Names of required keys that are absent.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.title.is_some(),
            self.characters.is_some(),
            self.plot.is_some(),
            self.themes.is_some(),
        ];
        REQUIRED_CONTENT_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Promote the draft to a full record.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseErrorKind::MissingFields`] naming every absent key.
    ///
    /// # Examples
    ///
    /// ```
    /// use plotweaver_core::{ContentDraft, ContentMetadata};
    ///
    /// let draft: ContentDraft = serde_json::from_str(r#"{"title": "X"}"#).unwrap();
    /// let err = draft
    ///     .into_content("SF", ContentMetadata::new("agent", "config.yaml"))
    ///     .unwrap_err();
    /// assert!(format!("{}", err).contains("characters, plot, themes"));
    /// ```
    #[track_caller]
    pub fn into_content(
        self,
        genre: impl Into<String>,
        metadata: ContentMetadata,
    ) -> Result<ContentStructure, ResponseError> {
        let missing = self.missing_fields();
        match self {
            ContentDraft {
                title: Some(title),
                characters: Some(characters),
                plot: Some(plot),
                themes: Some(themes),
            } => Ok(ContentStructure {
                title,
                characters,
                plot,
                themes,
                genre: genre.into(),
                metadata,
            }),
            _ => Err(ResponseError::new(ResponseErrorKind::MissingFields(
                missing.join(", "),
            ))),
        }
    }
}

/// Outcome of one generation attempt after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawGenerationResult {
    /// Output parsed as structured content
    Structured(ContentDraft),
    /// Output could not be parsed; kept verbatim so a human can read it
    FreeText(String),
    /// The service call failed or was skipped
    Absent,
}

impl RawGenerationResult {
    /// Whether a structured parse succeeded.
    pub fn is_structured(&self) -> bool {
        matches!(self, RawGenerationResult::Structured(_))
    }

    /// The unparsed text, if this is a free-text payload.
    pub fn free_text(&self) -> Option<&str> {
        match self {
            RawGenerationResult::FreeText(text) => Some(text),
            _ => None,
        }
    }
}
