//! CLI module for the relay
//!
//! # Commands
//!
//! - `serve` - Start the relay server
//! - `actions` - List configured actions
//! - `trigger` - Dispatch one action from the command line
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start server with default config
//! relay serve
//!
//! # Fire the lock_screen webhook once
//! relay trigger lock_screen
//!
//! # Generate shell completions
//! relay completions bash > ~/.bash_completion.d/relay
//! ```

pub mod actions;
pub mod completions;
pub mod config;
pub mod output;
pub mod serve;
pub mod trigger;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Webhook relay - forward named actions to automation webhooks
#[derive(Parser, Debug)]
#[command(
    name = "relay",
    version,
    about = "Forward named actions to pre-configured automation webhooks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the relay server
    Serve(ServeArgs),
    /// List configured actions
    Actions(ActionsArgs),
    /// Dispatch a single action and print the result
    Trigger(TriggerArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "relay.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "RELAY_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "RELAY_HOST")]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RELAY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Override the webhook timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

#[derive(Args, Debug)]
pub struct ActionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "relay.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct TriggerArgs {
    /// Action key to dispatch (e.g., lock_screen)
    pub key: String,

    /// JSON object forwarded as the webhook body
    #[arg(long)]
    pub payload: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "relay.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "relay.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
