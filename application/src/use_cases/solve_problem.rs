//! Solve Problem use case.
//!
//! The dedicated "solve" entry point: classify the query, run the matching
//! handler and return its [`Solution`]. Never fails; unrecognized input
//! yields a placeholder solution.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use solver_domain::core::string::truncate;
use solver_domain::{ProblemQuery, ProblemSolver, Solution};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct SolveProblemUseCase {
    solver: ProblemSolver,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Default for SolveProblemUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveProblemUseCase {
    pub fn new() -> Self {
        Self {
            solver: ProblemSolver::new(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn solve(&self, query: &ProblemQuery) -> Solution {
        let outcome = self.solver.route(query);

        debug!(
            "Solve: '{}' -> {} (keyword: {}), type {}",
            truncate(query.content(), 80),
            outcome.classification.category,
            outcome.classification.keyword.unwrap_or("-"),
            outcome.solution.kind
        );

        self.conversation_logger.log(ConversationEvent::new(
            "problem_solved",
            serde_json::json!({
                "query": query.content(),
                "category": outcome.classification.category.as_str(),
                "keyword": outcome.classification.keyword,
                "solution": &outcome.solution,
            }),
        ));

        outcome.solution
    }
}
