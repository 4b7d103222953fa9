//! CLI entrypoint for chat-solver
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use solver_application::{ConversationLogger, RespondUseCase};
use solver_domain::{DomainError, OutputFormat, ProblemQuery};
use solver_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, LexiconSentimentAnalyzer, TfIdfRuleMatcher,
    TrainingData, build_generator,
};
use solver_presentation::{ChatRepl, Cli, ConsoleFormatter};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting chat-solver");

    // === Configuration ===
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("Effective configuration:");
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    let format: OutputFormat = cli.output.or(config.output.format).unwrap_or_default();

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let mut responder_config = config.responder.to_responder_config();
    if let Some(mode) = cli.mode {
        responder_config = responder_config.with_mode(mode);
    }
    info!("Responder mode: {}", responder_config.mode);

    let training_path = cli
        .training_data
        .clone()
        .unwrap_or_else(|| config.training.path.clone());
    let training = TrainingData::load_or_builtin(&training_path);

    let mut responder = RespondUseCase::new(responder_config)
        .with_sentiment_analyzer(Arc::new(LexiconSentimentAnalyzer::new()))
        .with_rule_matcher(Arc::new(TfIdfRuleMatcher::fit(&training)))
        .with_text_generator(build_generator(&config.generator));

    if let Some(path) = &cli.log_file {
        match JsonlConversationLogger::open(path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                responder = responder.with_conversation_logger(logger);
            }
            None => warn!("Conversation logging disabled"),
        }
    }

    let responder = Arc::new(responder);

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(responder)
            .with_format(format)
            .with_history_file(config.repl.history_file.as_deref().map(expand_home));

        repl.run().await?;
        return Ok(());
    }

    // Single message mode - message is required
    let Some(message) = cli.message.as_deref() else {
        bail!("Message is required. Use --chat for interactive mode.");
    };
    let query = ProblemQuery::try_new(message.trim()).ok_or(DomainError::EmptyQuery)?;

    let output = if cli.solve {
        let solution = responder.solver().solve(&query);
        ConsoleFormatter::solution(format, query.content(), &solution)
    } else {
        let reply = responder.respond(query.content()).await;
        ConsoleFormatter::reply(format, query.content(), &reply)
    };

    println!("{}", output);

    Ok(())
}
