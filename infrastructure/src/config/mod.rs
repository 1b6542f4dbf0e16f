//! Configuration file loading for campus-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./campus-chat.toml` or `./.campus-chat.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/campus-chat/config.toml`
//! 4. Fallback: `~/.config/campus-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileBackendConfig, FileChatConfig, FileConfig, FileHealthConfig, FileUiConfig,
};
pub use loader::ConfigLoader;
