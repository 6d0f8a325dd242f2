//! Plot optimization command handler.

use super::AppContext;
use plotweaver::{Plot, PlotOptimizer, PlotweaverResult, Suggestion};

/// Ask the generation service to critique a plot and print its suggestions.
pub async fn optimize_plot(
    context: &AppContext,
    plot: Plot,
    genre: &str,
    agent: &str,
) -> PlotweaverResult<()> {
    let resolved = context.resolver().resolve(Some(agent));
    let optimizer = PlotOptimizer::new(resolved, context.invoker())
        .with_default_model(context.settings().default_model.as_str());

    match optimizer.analyze(&plot, genre).await {
        Some(Suggestion::Structured {
            analysis_points,
            overall_suggestion,
        }) => {
            println!("Analysis:");
            for (index, point) in analysis_points.iter().enumerate() {
                println!("  {}. {}", index + 1, point.point);
                println!("     -> {}", point.suggestion);
            }
            if let Some(overall) = overall_suggestion {
                println!("\nOverall: {}", overall);
            }
        }
        Some(Suggestion::Text(text)) => println!("{}", text),
        None => println!("No suggestions could be generated."),
    }

    Ok(())
}
