//! Plotweaver CLI binary.
//!
//! This binary provides command-line access to Plotweaver's functionality:
//! - Generate and save a story for a genre
//! - Ask for improvement suggestions on a plot
//! - Manage per-agent character rosters

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{AppContext, Cli, Commands, generate_story, handle_character_command, optimize_plot};

    // Load .env so GEMINI_API_KEY can live next to the config
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the flag
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let context = AppContext::load(cli.config)?;

    match cli.command {
        Commands::Generate {
            genre,
            agent,
            output_dir,
        } => {
            generate_story(&context, &genre, agent.as_deref(), output_dir).await?;
        }

        Commands::Optimize {
            setup,
            conflict,
            resolution,
            genre,
            agent,
        } => {
            let plot = plotweaver::Plot::new(setup, conflict, resolution);
            optimize_plot(&context, plot, &genre, &agent).await?;
        }

        Commands::Characters(cmd) => {
            handle_character_command(&context, cmd).await?;
        }
    }

    Ok(())
}
