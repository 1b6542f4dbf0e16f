//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for campus-chat
#[derive(Parser, Debug)]
#[command(name = "campus-chat")]
#[command(author, version, about = "Campus Assistant - chat with the campus helpdesk bot")]
#[command(long_about = r#"
Campus Chat talks to the campus assistant backend, either as a full-screen
terminal UI or as a one-shot question from the command line.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./campus-chat.toml or ./.campus-chat.toml    Project-level config
3. ~/.config/campus-chat/config.toml            Global config

Example:
  campus-chat                          Start the interactive TUI
  campus-chat "When does the library close?"
  campus-chat -b http://10.0.0.7:5000 "Is the gym open?"
  campus-chat --status
"#)]
pub struct Cli {
    /// Question to send in one-shot mode (starts the TUI when omitted)
    pub message: Option<String>,

    /// Backend base URL override
    #[arg(short, long, value_name = "URL")]
    pub backend: Option<String>,

    /// Check the backend connection and exit
    #[arg(long)]
    pub status: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the spinner and the status line in one-shot mode
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
