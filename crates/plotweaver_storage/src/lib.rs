//! Persistence for Plotweaver.
//!
//! - [`FileSystemArtifactStore`] writes each finished story as a JSON record
//!   and a prose rendering, plus raw unparsed responses for inspection.
//! - [`CharacterRoster`] keeps a per-agent list of characters on disk.
//!
//! # Layout
//!
//! ```text
//! stories/
//! ├── story_20250101_120000_000123_sf.json
//! ├── story_20250101_120000_000123_sf.txt
//! └── error_story_20250101_120000_000456_comedy.txt
//! data/
//! └── character_agent_v1/
//!     └── characters.json
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod naming;
mod render;
mod roster;
mod store;

pub use filesystem::FileSystemArtifactStore;
pub use naming::{MAX_GENRE_TOKEN_BYTES, artifact_base, sanitize_genre};
pub use render::render_text;
pub use roster::{CharacterRoster, DEFAULT_ROSTER_AGENT_ID};
pub use store::{ArtifactStore, StoredStory};
