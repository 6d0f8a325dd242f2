//! Story generation command handler.

use super::AppContext;
use plotweaver::{FileSystemArtifactStore, PlotweaverResult, StoryOutcome, StoryPipeline};
use std::path::PathBuf;
use std::sync::Arc;

/// Run the story pipeline once and print the result.
pub async fn generate_story(
    context: &AppContext,
    genre: &str,
    agent: Option<&str>,
    output_dir: Option<PathBuf>,
) -> PlotweaverResult<()> {
    let resolved = context.resolver().resolve(agent);
    let output_dir = output_dir.unwrap_or_else(|| context.settings().stories_dir.clone());

    let pipeline = StoryPipeline::new(
        resolved,
        context.invoker(),
        Arc::new(FileSystemArtifactStore::new(output_dir)),
    )
    .with_default_model(context.settings().default_model.as_str());

    let outcome = pipeline.run(genre).await?;
    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &StoryOutcome) {
    let content = outcome.content();

    println!("{:-<60}", "");
    println!("Title: {}", content.title);
    println!("Genre: {}", content.genre);
    if let Some(generation_type) = outcome.generation_type() {
        println!("Source: {}", generation_type);
    }

    println!("\nCharacters:");
    for character in &content.characters {
        println!(
            "  - {} ({}): {}",
            character.name, character.role, character.description
        );
    }

    println!("\nPlot:");
    println!("  Setup: {}", content.plot.setup);
    println!("  Conflict: {}", content.plot.conflict);
    println!("  Resolution: {}", content.plot.resolution);

    println!("\nThemes: {}", content.themes.join(", "));
    println!("{:-<60}", "");

    println!("Saved: {}", outcome.json_path().display());
    println!("Saved: {}", outcome.text_path().display());
    if let Some(path) = outcome.error_artifact() {
        println!("Unparsed response kept at: {}", path.display());
    }
}
