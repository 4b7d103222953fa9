//! Programming handler: canned Python snippets

use super::traits::ProblemHandler;
use crate::classifier::HandlerCategory;
use crate::core::query::ProblemQuery;
use crate::solution::{Solution, SolutionType};

/// Snippets are scanned in this order; the first key found in the query wins
const PYTHON_SNIPPETS: &[(&str, &str)] = &[
    ("hello world", "print(\"Hello, World!\")"),
    (
        "fibonacci",
        "def fib(n):\n    if n <= 1:\n        return n\n    return fib(n-1) + fib(n-2)",
    ),
    (
        "factorial",
        "def factorial(n):\n    if n == 0:\n        return 1\n    return n * factorial(n-1)",
    ),
    (
        "prime check",
        "def is_prime(n):\n    if n < 2:\n        return False\n    for i in range(2, int(n**0.5)+1):\n        if n % i == 0:\n            return False\n    return True",
    ),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ProgrammingHandler;

impl ProgrammingHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ProblemHandler for ProgrammingHandler {
    fn category(&self) -> HandlerCategory {
        HandlerCategory::Programming
    }

    fn solve(&self, query: &ProblemQuery) -> Solution {
        let lower = query.lowercase();

        if lower.contains("python")
            && let Some((key, snippet)) = PYTHON_SNIPPETS.iter().find(|(key, _)| lower.contains(*key))
        {
            return Solution::new(
                format!("Python solution for {}", key),
                *snippet,
                SolutionType::Programming,
            )
            .with_language("Python");
        }

        Solution::new(
            "Programming solution",
            "Here's a general approach to solve this programming problem...",
            SolutionType::Programming,
        )
    }
}
