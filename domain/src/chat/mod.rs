//! Chat-level value objects: replies and sentiment.

pub mod reply;
pub mod sentiment;

pub use reply::{ChatReply, ReplyKind};
pub use sentiment::Sentiment;
