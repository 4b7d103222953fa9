//! Use cases (application services)

pub mod respond;
pub mod solve_problem;
