//! Plotweaver - agent-configured story generation
//!
//! Plotweaver produces a short structured story (title, cast, three-part
//! plot, themes) for a requested genre. An agent configuration decides
//! whether a generation service is consulted; whenever it is not, or its
//! answer is unusable, the story is built from the agent's plot templates
//! instead. Every run ends with a JSON record and a readable text rendering
//! on disk.
//!
//! # Quick Start
//!
//! ```no_run
//! use plotweaver::{
//!     ConfigDocument, ConfigResolver, FileSystemArtifactStore, GenerationInvoker, StoryPipeline,
//! };
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document = ConfigDocument::from_file("config/agent_config.yaml")?;
//! let resolved = ConfigResolver::new(document, "config/agent_config.yaml").resolve(None);
//!
//! let pipeline = StoryPipeline::new(
//!     resolved,
//!     GenerationInvoker::new(None),
//!     Arc::new(FileSystemArtifactStore::new("stories")),
//! );
//! let outcome = pipeline.run("SF").await?;
//! println!("{}", outcome.content().title);
//! # Ok(())
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini generation driver (on by default)
//!
//! # Architecture
//!
//! - `plotweaver_error` - Error types
//! - `plotweaver_core` - Core data types (configs, requests, story records)
//! - `plotweaver_interface` - `GenerationDriver` trait
//! - `plotweaver_config` - Agent documents and application settings
//! - `plotweaver_storage` - Story artifacts and character rosters
//! - `plotweaver_narrative` - Prompting, normalization, fallback and the pipeline
//! - `plotweaver_models` - Generation-service drivers
//!
//! This crate (`plotweaver`) re-exports everything for convenience.

pub use plotweaver_config::*;
pub use plotweaver_core::*;
pub use plotweaver_error::*;
pub use plotweaver_interface::*;
pub use plotweaver_narrative::*;
pub use plotweaver_storage::*;

#[cfg(feature = "gemini")]
pub use plotweaver_models::*;
