//! Physics handler: formula lookup by keyword, no computation

use super::traits::ProblemHandler;
use crate::classifier::HandlerCategory;
use crate::core::query::ProblemQuery;
use crate::solution::{Solution, SolutionType};

/// A canned formula entry
struct FormulaTemplate {
    keyword: &'static str,
    answer: &'static str,
    explanation: &'static str,
    formula: &'static str,
}

const FORMULAS: &[FormulaTemplate] = &[
    FormulaTemplate {
        keyword: "velocity",
        answer: "v = d/t",
        explanation: "Velocity = distance ÷ time",
        formula: "v = Δx/Δt",
    },
    FormulaTemplate {
        keyword: "acceleration",
        answer: "a = Δv/Δt",
        explanation: "Acceleration = change in velocity ÷ time",
        formula: "a = (v_f - v_i)/t",
    },
    FormulaTemplate {
        keyword: "force",
        answer: "F = m × a",
        explanation: "Force = mass × acceleration (Newton's Second Law)",
        formula: "F = ma",
    },
    FormulaTemplate {
        keyword: "energy",
        answer: "E = m × c²",
        explanation: "Energy = mass × speed of light squared (Einstein's equation)",
        formula: "E = mc²",
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicsHandler;

impl PhysicsHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ProblemHandler for PhysicsHandler {
    fn category(&self) -> HandlerCategory {
        HandlerCategory::Physics
    }

    fn solve(&self, query: &ProblemQuery) -> Solution {
        let lower = query.lowercase();
        match FORMULAS.iter().find(|t| lower.contains(t.keyword)) {
            Some(t) => Solution::new(t.answer, t.explanation, SolutionType::Physics)
                .with_formula(t.formula),
            None => Solution::new(
                "Physics principle",
                "Applying fundamental physics laws and equations",
                SolutionType::Physics,
            ),
        }
    }
}
