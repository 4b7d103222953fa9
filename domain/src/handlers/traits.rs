//! Handler trait implemented by each category

use crate::classifier::HandlerCategory;
use crate::core::query::ProblemQuery;
use crate::solution::Solution;

/// A category handler: runs its own keyword cascade and always answers
///
/// Implementations never fail outward; anything that goes wrong while
/// computing becomes an error-typed [`Solution`].
pub trait ProblemHandler: Send + Sync {
    /// Category this handler serves
    fn category(&self) -> HandlerCategory;

    /// Produce a solution for the query
    fn solve(&self, query: &ProblemQuery) -> Solution;
}
