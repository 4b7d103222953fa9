//! Category classification: which handler answers a query.

pub mod category;
pub mod rules;

pub use category::HandlerCategory;
pub use rules::{CLASSIFICATION_RULES, CategoryClassifier, Classification, FALLBACK_CATEGORY};
