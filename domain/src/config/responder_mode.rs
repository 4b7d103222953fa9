//! Responder mode value object

use serde::{Deserialize, Serialize};

/// Which problem path the responder tries before rule matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResponderMode {
    /// Problem keywords route to the category solver (default)
    #[default]
    Solver,
    /// Every message is offered to the calculator first
    Calculator,
}

impl ResponderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponderMode::Solver => "solver",
            ResponderMode::Calculator => "calculator",
        }
    }
}

impl std::fmt::Display for ResponderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResponderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solver" => Ok(ResponderMode::Solver),
            "calculator" | "calc" => Ok(ResponderMode::Calculator),
            _ => Err(format!("Unknown responder mode: {}. Valid: solver, calculator", s)),
        }
    }
}
