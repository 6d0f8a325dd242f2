//! Per-agent character roster.

use plotweaver_core::Character;
use plotweaver_error::{PlotweaverResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Agent id the roster is kept under when none is given.
pub const DEFAULT_ROSTER_AGENT_ID: &str = "character_agent_v1";

const ROSTER_FILE: &str = "characters.json";

/// Characters registered for one agent, persisted to
/// `{root}/{agent_id}/characters.json`.
///
/// Names are unique: adding a character whose name is already present
/// leaves the roster unchanged.
///
/// # Example
///
/// ```no_run
/// use plotweaver_storage::CharacterRoster;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut roster = CharacterRoster::open("data", "character_agent_v1").await?;
/// roster.add("主人公", "protagonist", "若き冒険者").await?;
/// assert!(roster.get("主人公").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CharacterRoster {
    agent_id: String,
    path: PathBuf,
    characters: Vec<Character>,
}

impl CharacterRoster {
    /// Open the roster for `agent_id` under `root`.
    ///
    /// A missing file yields an empty roster. A file that is not a JSON list
    /// of characters is logged and treated as empty; it is replaced on the
    /// next successful [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created or the
    /// file exists but cannot be read.
    #[instrument(skip(root), fields(root = %root.as_ref().display()))]
    pub async fn open(root: impl AsRef<Path>, agent_id: &str) -> PlotweaverResult<Self> {
        let dir = root.as_ref().join(agent_id);
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        let path = dir.join(ROSTER_FILE);
        let characters = Self::load(&path).await?;

        debug!(count = characters.len(), path = %path.display(), "Opened character roster");
        Ok(Self {
            agent_id: agent_id.to_string(),
            path,
            characters,
        })
    }

    async fn load(path: &Path) -> PlotweaverResult<Vec<Character>> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };

        match serde_json::from_str::<Vec<Character>>(&contents) {
            Ok(characters) => Ok(characters),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Character roster is malformed, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Write the roster through a temp file and rename.
    async fn save(&self) -> PlotweaverResult<()> {
        let json = serde_json::to_string_pretty(&self.characters)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))?;

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, json).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "rename {} to {}: {}",
                    temp_path.display(),
                    self.path.display(),
                    e
                )))
            })?;
        Ok(())
    }

    /// Register a character and persist the roster.
    ///
    /// If a character with the same name exists, nothing is written and the
    /// existing entry is returned.
    #[instrument(skip(self, role, description), fields(agent_id = %self.agent_id))]
    pub async fn add(
        &mut self,
        name: &str,
        role: &str,
        description: &str,
    ) -> PlotweaverResult<Character> {
        if let Some(existing) = self.get(name) {
            info!("Character already registered, skipping");
            return Ok(existing.clone());
        }

        let character = Character::new(name, role, description);
        self.characters.push(character.clone());
        self.save().await?;

        info!(role, "Character added");
        Ok(character)
    }

    /// Character with the given name.
    pub fn get(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// All characters in registration order.
    pub fn list(&self) -> &[Character] {
        &self.characters
    }

    /// Agent the roster belongs to.
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
