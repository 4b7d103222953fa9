//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Empty message")]
    EmptyQuery,

    #[error("{0}")]
    Calculation(String),

    #[error("Invalid expression: {0}")]
    InvalidExpression(String),
}

impl DomainError {
    /// Division by zero, worded the way the math handler reports it
    pub fn division_by_zero() -> Self {
        DomainError::Calculation("division by zero".to_string())
    }
}

impl From<std::num::ParseIntError> for DomainError {
    fn from(e: std::num::ParseIntError) -> Self {
        DomainError::Calculation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_display() {
        assert_eq!(DomainError::division_by_zero().to_string(), "division by zero");
    }

    #[test]
    fn test_parse_int_error_converts() {
        let err: DomainError = "99999999999999999999".parse::<i64>().unwrap_err().into();
        assert!(matches!(err, DomainError::Calculation(_)));
        assert!(err.to_string().contains("too large"));
    }
}
