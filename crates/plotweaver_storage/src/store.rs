//! Artifact store trait.

use plotweaver_core::{ContentStructure, GenerationType};
use plotweaver_error::PlotweaverResult;
use std::path::PathBuf;

/// A persisted story and where its artifacts landed.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct StoredStory {
    /// The finalized record, as written
    content: ContentStructure,
    /// Path of the JSON record
    json_path: PathBuf,
    /// Path of the prose rendering
    text_path: PathBuf,
}

impl StoredStory {
    /// Create a stored story.
    pub fn new(content: ContentStructure, json_path: PathBuf, text_path: PathBuf) -> Self {
        Self {
            content,
            json_path,
            text_path,
        }
    }

    /// Consume into the finalized record.
    pub fn into_content(self) -> ContentStructure {
        self.content
    }
}

/// Trait for story artifact backends.
///
/// Persistence failures are the one error a pipeline run surfaces; every
/// other failure is absorbed upstream.
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Finalize the record's metadata and write its artifacts.
    ///
    /// The metadata timestamp and generation type are written here, as the
    /// last mutation before persistence.
    async fn save(
        &self,
        content: ContentStructure,
        generation_type: GenerationType,
    ) -> PlotweaverResult<StoredStory>;

    /// Write a raw, unparseable generation response for later inspection.
    ///
    /// Returns the path of the written file.
    async fn save_unparsed(&self, raw_text: &str, genre: &str) -> PlotweaverResult<PathBuf>;
}
