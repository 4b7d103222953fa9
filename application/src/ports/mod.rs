//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod conversation_logger;
pub mod rule_matcher;
pub mod sentiment;
pub mod text_generator;
