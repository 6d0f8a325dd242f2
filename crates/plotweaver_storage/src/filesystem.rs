//! Filesystem-based artifact storage implementation.

use crate::{ArtifactStore, StoredStory, artifact_base, render_text};
use chrono::Local;
use plotweaver_core::{ContentStructure, GenerationType};
use plotweaver_error::{PlotweaverResult, StorageError, StorageErrorKind};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Upper bound on `_<n>` suffixes tried for one base name.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Filesystem artifact backend.
///
/// Writes into a single flat directory:
///
/// ```text
/// {base_path}/story_{timestamp}_{genre}.json
/// {base_path}/story_{timestamp}_{genre}.txt
/// {base_path}/error_story_{timestamp}_{genre}.txt
/// ```
///
/// Every file is opened with create-new semantics. When a name is taken, a
/// numeric suffix (`_1`, `_2`, ...) is appended to the base, so concurrent
/// writers never overwrite each other.
#[derive(Debug, Clone)]
pub struct FileSystemArtifactStore {
    base_path: PathBuf,
}

impl FileSystemArtifactStore {
    /// Create a store writing to `base_path`.
    ///
    /// The directory is created on the first write.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Directory artifacts are written to.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    async fn ensure_dir(&self) -> PlotweaverResult<()> {
        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    self.base_path.display(),
                    e
                )))
            })?;
        Ok(())
    }

    fn candidate_name(base: &str, attempt: u32) -> String {
        if attempt == 0 {
            base.to_string()
        } else {
            format!("{}_{}", base, attempt)
        }
    }

    async fn create_new(path: &Path) -> std::io::Result<File> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
    }

    fn write_error(path: &Path, e: std::io::Error) -> StorageError {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    }

    /// Claim a `.json` / `.txt` pair that no other writer holds.
    async fn reserve_pair(&self, base: &str) -> PlotweaverResult<(PathBuf, File, PathBuf, File)> {
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = Self::candidate_name(base, attempt);
            let json_path = self.base_path.join(format!("{}.json", name));
            let text_path = self.base_path.join(format!("{}.txt", name));

            let json_file = match Self::create_new(&json_path).await {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(Self::write_error(&json_path, e).into()),
            };

            match Self::create_new(&text_path).await {
                Ok(text_file) => return Ok((json_path, json_file, text_path, text_file)),
                Err(e) => {
                    drop(json_file);
                    if let Err(cleanup) = tokio::fs::remove_file(&json_path).await {
                        tracing::warn!(
                            path = %json_path.display(),
                            error = %cleanup,
                            "Failed to release reserved artifact name"
                        );
                    }
                    if e.kind() != ErrorKind::AlreadyExists {
                        return Err(Self::write_error(&text_path, e).into());
                    }
                }
            }
        }

        Err(StorageError::new(StorageErrorKind::NameExhausted(base.to_string())).into())
    }

    /// Claim a single file named `{prefix}{base}[_n].{extension}`.
    async fn reserve_single(
        &self,
        prefix: &str,
        base: &str,
        extension: &str,
    ) -> PlotweaverResult<(PathBuf, File)> {
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = Self::candidate_name(base, attempt);
            let path = self
                .base_path
                .join(format!("{}{}.{}", prefix, name, extension));

            match Self::create_new(&path).await {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(Self::write_error(&path, e).into()),
            }
        }

        Err(StorageError::new(StorageErrorKind::NameExhausted(base.to_string())).into())
    }

    /// Remove partially written artifacts so a failed save leaves nothing behind.
    async fn release(paths: &[&Path]) {
        for path in paths {
            match tokio::fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to remove partial artifact"
                ),
            }
        }
    }

    async fn write_contents(mut file: File, path: &Path, contents: &[u8]) -> PlotweaverResult<()> {
        file.write_all(contents)
            .await
            .map_err(|e| Self::write_error(path, e))?;
        file.flush().await.map_err(|e| Self::write_error(path, e))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ArtifactStore for FileSystemArtifactStore {
    #[tracing::instrument(skip(self, content, generation_type), fields(genre = %content.genre, %generation_type))]
    async fn save(
        &self,
        mut content: ContentStructure,
        generation_type: GenerationType,
    ) -> PlotweaverResult<StoredStory> {
        let timestamp = Local::now();
        content.metadata.finalize(generation_type, timestamp)?;

        let json = serde_json::to_string_pretty(&content).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialization(e.to_string()))
        })?;
        let text = render_text(&content);

        self.ensure_dir().await?;
        let base = artifact_base(&timestamp, &content.genre);
        let (json_path, json_file, text_path, text_file) = self.reserve_pair(&base).await?;

        let written = async {
            Self::write_contents(json_file, &json_path, json.as_bytes()).await?;
            Self::write_contents(text_file, &text_path, text.as_bytes()).await
        }
        .await;
        if let Err(e) = written {
            Self::release(&[&json_path, &text_path]).await;
            return Err(e);
        }

        tracing::info!(
            json_path = %json_path.display(),
            text_path = %text_path.display(),
            "Saved story artifacts"
        );

        Ok(StoredStory::new(content, json_path, text_path))
    }

    #[tracing::instrument(skip(self, raw_text), fields(size = raw_text.len()))]
    async fn save_unparsed(&self, raw_text: &str, genre: &str) -> PlotweaverResult<PathBuf> {
        self.ensure_dir().await?;
        let base = artifact_base(&Local::now(), genre);
        let (path, file) = self.reserve_single("error_", &base, "txt").await?;

        Self::write_contents(file, &path, raw_text.as_bytes()).await?;

        tracing::info!(path = %path.display(), "Saved unparsed generation response");
        Ok(path)
    }
}
