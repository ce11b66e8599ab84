//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// archai - AI-assisted troubleshooting for Arch Linux.
#[derive(Debug, Parser)]
#[command(name = "archai")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the host and install the archai executable
    Setup,

    /// Ask a single question
    Ask(AskArgs),

    /// Start an interactive session
    Chat(ChatArgs),

    /// Show recent conversation history
    History(HistoryArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ask` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AskArgs {
    /// The question to ask
    pub question: String,

    /// Model used for generation
    #[arg(long, default_value = "gemini-pro")]
    pub model: String,

    /// Skip the Arch Wiki search
    #[arg(long)]
    pub no_wiki: bool,

    /// Google AI Studio API key
    #[arg(long, env = "GOOGLE_AI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Arguments for the `chat` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ChatArgs {
    /// Model used for generation
    #[arg(long, default_value = "gemini-pro")]
    pub model: String,

    /// Skip the Arch Wiki search
    #[arg(long)]
    pub no_wiki: bool,

    /// Google AI Studio API key
    #[arg(long, env = "GOOGLE_AI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl Default for ChatArgs {
    fn default() -> Self {
        Self {
            model: "gemini-pro".to_string(),
            no_wiki: false,
            api_key: None,
        }
    }
}

/// Arguments for the `history` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
