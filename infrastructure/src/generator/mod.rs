//! Text generator adapters
//!
//! [`build_generator`] picks the adapter named by `[generator] provider`.

#[cfg(feature = "ollama")]
mod ollama;

#[cfg(feature = "ollama")]
pub use ollama::OllamaTextGenerator;

use crate::config::FileGeneratorConfig;
use solver_application::ports::text_generator::{NoTextGenerator, TextGenerator};
use std::sync::Arc;
use tracing::warn;

/// Build the configured generator, or [`NoTextGenerator`] when disabled
pub fn build_generator(config: &FileGeneratorConfig) -> Arc<dyn TextGenerator> {
    match config.provider().as_str() {
        "none" => Arc::new(NoTextGenerator),
        #[cfg(feature = "ollama")]
        "ollama" => {
            tracing::info!("Using Ollama generator: {} at {}", config.model, config.base_url);
            Arc::new(OllamaTextGenerator::with_base_url(
                config.model.clone(),
                config.base_url.clone(),
            ))
        }
        #[cfg(not(feature = "ollama"))]
        "ollama" => {
            warn!("Generator 'ollama' requested but built without the `ollama` feature");
            Arc::new(NoTextGenerator)
        }
        other => {
            warn!("Unknown generator provider '{}', generation disabled", other);
            Arc::new(NoTextGenerator)
        }
    }
}
