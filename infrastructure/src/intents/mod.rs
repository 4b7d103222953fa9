//! Training intents for the rule matcher

mod training_data;

pub use training_data::{Intent, TrainingData, TrainingDataError};
