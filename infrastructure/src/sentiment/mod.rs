//! Sentiment analyzers

mod lexicon;

pub use lexicon::{LexiconSentimentAnalyzer, NEGATIVE_LABEL, POSITIVE_LABEL};
