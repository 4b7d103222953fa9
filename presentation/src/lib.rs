//! Presentation layer for chat-solver
//!
//! This crate contains CLI definitions, output formatters,
//! and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use solver_domain::OutputFormat;
