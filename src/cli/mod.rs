//! CLI for the fable binary.
//!
//! Provides command-line parsing for inspecting and invoking the demo
//! tools and agents. Uses clap for argument parsing and owo-colors for
//! colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fable - demo tool agents for LLM orchestrators
#[derive(Parser, Debug)]
#[command(
    name = "fable",
    version,
    about = "Demo tool agents for LLM orchestrators",
    long_about = "Two demonstration agents built on a uniform tool contract:\n\
                  a weather/time toolkit and a three-step story workflow.\n\
                  Tools can be listed and invoked directly; agent definitions\n\
                  are what an external orchestrator would register.",
    after_help = "EXAMPLES:\n    \
                  fable tool list\n    \
                  fable tool call get_weather --args '{\"city\": \"New York\"}'\n    \
                  fable agent list\n    \
                  fable agent show story_orchestrator"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "fable.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect and invoke tools
    #[command(subcommand)]
    Tool(ToolCommands),

    /// Inspect agent definitions
    #[command(subcommand)]
    Agent(AgentCommands),
}

/// Tool subcommands
#[derive(Subcommand, Debug)]
pub enum ToolCommands {
    /// List all registered tools
    List,

    /// Invoke a tool with JSON arguments
    Call {
        /// Name of the tool
        name: String,

        /// JSON object of tool arguments
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
}

/// Agent subcommands
#[derive(Subcommand, Debug)]
pub enum AgentCommands {
    /// List all configured agents
    List,

    /// Show details for a specific agent
    Show {
        /// Name of the agent
        name: String,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
