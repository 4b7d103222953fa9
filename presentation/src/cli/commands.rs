//! CLI command definitions

use clap::Parser;
use solver_domain::{OutputFormat, ResponderMode};
use std::path::PathBuf;

/// CLI arguments for chat-solver
#[derive(Parser, Debug)]
#[command(name = "chat-solver")]
#[command(author, version, about = "Rule-based chat problem solver")]
#[command(long_about = r#"
chat-solver answers a chat message through a fixed cascade:

1. Problem solver: messages containing a problem keyword ("solve",
   "calculate", "what is", ...) are classified and solved
2. Rule matcher: TF-IDF similarity against training intents
3. Text generator: an optional local model
4. Fallback: a canned reply

Configuration files are loaded from (in priority order):
1. CHAT_SOLVER_<SECTION>__<KEY> environment variables
2. --config <path>          Explicit config file
3. ./chat-solver.toml       Project-level config
4. ~/.config/chat-solver/config.toml   Global config

Example:
  chat-solver "What is 12 * 4?"
  chat-solver --solve "convert 100 celsius to fahrenheit" -o json
  chat-solver --chat --mode calculator
"#)]
pub struct Cli {
    /// The message to answer (not required in chat mode)
    pub message: Option<String>,

    /// Skip the chat cascade and print the solver's structured solution
    #[arg(short, long)]
    pub solve: bool,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Output format: reply, full or json [default: from config, else reply]
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Responder mode: solver or calculator
    #[arg(long, value_name = "MODE")]
    pub mode: Option<ResponderMode>,

    /// Training intents JSON file
    #[arg(long, value_name = "PATH")]
    pub training_data: Option<PathBuf>,

    /// Append a JSONL conversation transcript to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
