//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Plotweaver - story generation with template fallback
#[derive(Parser, Debug)]
#[command(name = "plotweaver")]
#[command(about = "Generate short stories from agent configurations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Agent configuration document (overrides settings)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate and save a story for a genre
    Generate {
        /// Requested genre, e.g. "SF" or "ファンタジー"
        genre: String,

        /// Agent to run (defaults to the document's default agent)
        #[arg(long)]
        agent: Option<String>,

        /// Directory for story artifacts (overrides settings)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Ask for improvement suggestions on an existing plot
    Optimize {
        /// Opening situation
        #[arg(long)]
        setup: String,

        /// Central conflict
        #[arg(long)]
        conflict: String,

        /// How the conflict ends
        #[arg(long)]
        resolution: String,

        /// Genre of the story
        #[arg(long, default_value = "指定なし")]
        genre: String,

        /// Agent to run
        #[arg(long, default_value = "plot_optimizer_agent_v1")]
        agent: String,
    },

    /// Character roster commands
    #[command(subcommand)]
    Characters(CharacterCommands),
}

/// Character roster subcommands
#[derive(Subcommand, Debug)]
pub enum CharacterCommands {
    /// Register a character
    Add {
        /// Character name (unique within the roster)
        #[arg(long)]
        name: String,

        /// Narrative role
        #[arg(long)]
        role: String,

        /// Short description
        #[arg(long)]
        description: String,

        /// Roster owner
        #[arg(long, default_value = "character_agent_v1")]
        agent: String,
    },

    /// Show one character
    Get {
        /// Character name
        name: String,

        /// Roster owner
        #[arg(long, default_value = "character_agent_v1")]
        agent: String,
    },

    /// List all characters
    List {
        /// Roster owner
        #[arg(long, default_value = "character_agent_v1")]
        agent: String,
    },
}
