//! Rule matching over training intents

mod tfidf;

pub use tfidf::TfIdfRuleMatcher;
