//! Story generation pipeline for Plotweaver.
//!
//! A run resolves configuration, assembles prompts, makes at most one call
//! to the generation service, normalizes whatever comes back and, when that
//! output is unusable or absent, builds the story from templates instead.
//! Either way the result has the same [`ContentStructure`] shape and is
//! persisted through an [`ArtifactStore`].
//!
//! # Example
//!
//! ```rust,ignore
//! use plotweaver_config::{ConfigDocument, ConfigResolver};
//! use plotweaver_models::GeminiClient;
//! use plotweaver_narrative::{GenerationInvoker, StoryPipeline};
//! use plotweaver_storage::FileSystemArtifactStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let document = ConfigDocument::from_file("config/agent_config.yaml")?;
//! let resolved = ConfigResolver::new(document, "config/agent_config.yaml").resolve(None);
//!
//! let invoker = GenerationInvoker::new(GeminiClient::from_env().ok().map(|c| Arc::new(c) as _));
//! let store = Arc::new(FileSystemArtifactStore::new("stories"));
//! let pipeline = StoryPipeline::new(resolved, invoker, store);
//!
//! let outcome = pipeline.run("SF").await?;
//! println!("{}", outcome.content().title);
//! # Ok(())
//! # }
//! ```
//!
//! [`ContentStructure`]: plotweaver_core::ContentStructure
//! [`ArtifactStore`]: plotweaver_storage::ArtifactStore

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fallback;
mod invoker;
mod normalize;
mod optimizer;
mod pipeline;
mod prompt;

pub use fallback::{
    DEFAULT_CHARACTERS, DEFAULT_CONFLICT, DEFAULT_RESOLUTION, DEFAULT_SETUP, DEFAULT_THEMES,
    FallbackStrategy,
};
pub use invoker::{GenerationInvoker, GenerationParams};
pub use normalize::{normalize, parse_json, strip_code_fence};
pub use optimizer::{
    AnalysisPoint, GENERATION_DISABLED_TEXT, PlotOptimizer, Suggestion, TOOL_MISSING_TEXT,
    plot_summary,
};
pub use pipeline::{StoryOutcome, StoryPipeline};
pub use prompt::{AssembledPrompt, PromptAssembler, render_template};
