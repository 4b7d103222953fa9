//! Solution records produced by the category handlers.

pub mod entities;

pub use entities::{Answer, Solution, SolutionType};
