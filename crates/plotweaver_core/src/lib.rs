//! Core data types for the Plotweaver story generation pipeline.
//!
//! This crate holds the records that flow between pipeline stages: agent and
//! tool configuration, generation requests, the transient raw generation
//! result, and the canonical [`ContentStructure`] every run produces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod agent;
mod content;
mod draft;
mod metadata;
mod request;

pub use agent::{
    AgentConfig, AgentConfigBuilder, GenerationToolConfig, PlotTemplate, PromptPurpose,
    PromptTemplatePair,
};
pub use content::{Character, ContentStructure, Plot};
pub use draft::{ContentDraft, RawGenerationResult, REQUIRED_CONTENT_FIELDS};
pub use metadata::{ContentMetadata, GenerationType};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
