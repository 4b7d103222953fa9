//! Core domain concepts shared across all subdomains.
//!
//! - [`query::ProblemQuery`]: the raw text a user asked
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: text helpers for logging and display

pub mod error;
pub mod query;
pub mod string;
