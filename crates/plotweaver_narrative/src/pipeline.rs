//! The story pipeline orchestrator.

use crate::{FallbackStrategy, GenerationInvoker, GenerationParams, PromptAssembler, normalize};
use plotweaver_config::ResolvedAgent;
use plotweaver_core::{
    ContentMetadata, ContentStructure, GenerationType, PromptPurpose, RawGenerationResult,
};
use plotweaver_error::PlotweaverResult;
use plotweaver_storage::ArtifactStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct StoryOutcome {
    /// The persisted, finalized story
    content: ContentStructure,
    /// JSON artifact
    json_path: PathBuf,
    /// Prose artifact
    text_path: PathBuf,
    /// Raw service output that could not be parsed, if any was saved
    error_artifact: Option<PathBuf>,
}

impl StoryOutcome {
    /// Provenance of the story.
    pub fn generation_type(&self) -> Option<GenerationType> {
        self.content.metadata.generation_type
    }
}

/// Generates and persists one story per [`run`](Self::run).
///
/// The generation service is tried only when the agent enables it and a
/// tool config resolved. Any failure along that path (missing credential,
/// invalid template, service error, unparseable or incomplete output) falls
/// back to [`FallbackStrategy`]. Only persistence failures reach the caller.
///
/// Runs share no mutable state, so one pipeline can serve concurrent runs.
pub struct StoryPipeline {
    resolved: ResolvedAgent,
    invoker: GenerationInvoker,
    store: Arc<dyn ArtifactStore>,
    default_model: String,
}

impl std::fmt::Debug for StoryPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryPipeline")
            .field("agent_id", self.resolved.agent_id())
            .field("invoker", &self.invoker)
            .field("default_model", &self.default_model)
            .finish_non_exhaustive()
    }
}

impl StoryPipeline {
    /// Create a pipeline for a resolved agent.
    pub fn new(
        resolved: ResolvedAgent,
        invoker: GenerationInvoker,
        store: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            resolved,
            invoker,
            store,
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Builder method overriding the model used when configuration names none.
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Produce, persist and return a story for `genre`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if an artifact cannot be written. No other
    /// failure is surfaced.
    #[instrument(skip(self), fields(agent_id = %self.resolved.agent_id()))]
    pub async fn run(&self, genre: &str) -> PlotweaverResult<StoryOutcome> {
        let metadata = ContentMetadata::new(
            self.resolved.agent_id().as_str(),
            self.resolved.config_path().as_str(),
        );

        let mut error_artifact = None;
        let (content, generation_type) = match self.generate(genre).await {
            RawGenerationResult::Structured(draft) => {
                match draft.into_content(genre, metadata.clone()) {
                    Ok(content) => {
                        info!("Using generated story");
                        (content, GenerationType::Llm)
                    }
                    Err(e) => {
                        warn!(error = %e, "Generated story incomplete, falling back to templates");
                        (self.fallback(genre, metadata), GenerationType::Template)
                    }
                }
            }
            RawGenerationResult::FreeText(text) => {
                warn!("Generated story is not valid JSON, falling back to templates");
                error_artifact = Some(self.store.save_unparsed(&text, genre).await?);
                (self.fallback(genre, metadata), GenerationType::Template)
            }
            RawGenerationResult::Absent => {
                info!("Building story from templates");
                (self.fallback(genre, metadata), GenerationType::Template)
            }
        };

        let stored = self.store.save(content, generation_type).await?;
        let json_path = stored.json_path().clone();
        let text_path = stored.text_path().clone();

        Ok(StoryOutcome {
            content: stored.into_content(),
            json_path,
            text_path,
            error_artifact,
        })
    }

    fn fallback(&self, genre: &str, metadata: ContentMetadata) -> ContentStructure {
        FallbackStrategy::new(self.resolved.agent().template_bank()).build(genre, metadata)
    }

    /// Try the generation service once.
    async fn generate(&self, genre: &str) -> RawGenerationResult {
        if !*self.resolved.agent().use_generation() {
            return RawGenerationResult::Absent;
        }

        let Some(params) = GenerationParams::from_agent(&self.resolved, &self.default_model)
            .map(GenerationParams::expecting_json)
        else {
            warn!("Generation enabled but no tool config resolved, skipping generation");
            return RawGenerationResult::Absent;
        };

        let prompt = match PromptAssembler::for_agent(&self.resolved).assemble(
            PromptPurpose::Story,
            genre,
            None,
        ) {
            Ok(prompt) => prompt,
            Err(e) => {
                error!(error = %e, "Invalid prompt template, skipping generation");
                return RawGenerationResult::Absent;
            }
        };

        match self.invoker.invoke(&prompt, &params).await {
            Ok(text) => normalize(Some(&text)),
            Err(e) => {
                warn!(error = %e, "Generation failed, falling back to templates");
                RawGenerationResult::Absent
            }
        }
    }
}
