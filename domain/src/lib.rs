//! Domain layer for chat-solver
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Classification
//!
//! A query is routed to exactly one [`HandlerCategory`] by an ordered keyword
//! cascade; the first rule whose trigger word appears wins.
//!
//! ## Handlers
//!
//! Each category has a [`ProblemHandler`] that runs its own cascade and
//! always returns a [`Solution`], falling back to a placeholder when nothing
//! matches.
//!
//! ## Calculator
//!
//! A restricted arithmetic evaluator backs the calculator-mode replies.

pub mod calculator;
pub mod chat;
pub mod classifier;
pub mod config;
pub mod core;
pub mod handlers;
pub mod solution;
pub mod solver;

// Re-export commonly used types
pub use calculator::{Evaluation, evaluate, quick_math};
pub use chat::{ChatReply, ReplyKind, Sentiment};
pub use classifier::{CategoryClassifier, Classification, HandlerCategory};
pub use config::{OutputFormat, ResponderMode};
pub use core::{error::DomainError, query::ProblemQuery};
pub use handlers::{
    ConversionHandler, LogicHandler, MathHandler, PhysicsHandler, ProblemHandler,
    ProgrammingHandler, TimeDateHandler,
};
pub use solution::{Answer, Solution, SolutionType};
pub use solver::{ProblemSolver, SolveOutcome};
