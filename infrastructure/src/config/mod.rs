//! Configuration file loading for chat-solver
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CHAT_SOLVER_*` environment variables (`__` separates section and key)
//! 2. `--config <path>` specified file
//! 3. Project root: `./chat-solver.toml` or `./.chat-solver.toml`
//! 4. Global: `$XDG_CONFIG_HOME/chat-solver/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_OLLAMA_BASE, DEFAULT_TRAINING_PATH, FileConfig, FileGeneratorConfig, FileOutputConfig,
    FileReplConfig, FileResponderConfig, FileTrainingConfig,
};
pub use loader::ConfigLoader;
