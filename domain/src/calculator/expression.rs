//! Restricted arithmetic expression evaluator
//!
//! Accepts only digits, `.`, `+ - * / ^`, `**` and parentheses; whitespace is
//! ignored. Anything else is rejected before parsing, so no input can reach
//! more than arithmetic.
//!
//! Grammar (`^` and `**` are right-associative and bind tighter than a
//! leading minus, so `-2^2` is `-4` and `2^-1` is `0.5`):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary (('^' | '**') unary)?
//! primary := number | '(' expr ')'
//! ```

use crate::core::error::DomainError;
use crate::core::string::format_float;

const ALLOWED: &str = "0123456789+-*/().^";

/// Deepest operand nesting (parentheses, signs, exponent chains) accepted
pub const MAX_DEPTH: usize = 200;

/// Evaluated value plus whether it should print as an integer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    /// True when the source had no `.` or `/` and the value is whole
    pub integral: bool,
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.integral {
            // `+ 0.0` folds -0 into 0
            write!(f, "{:.0}", self.value + 0.0)
        } else {
            write!(f, "{}", format_float(self.value))
        }
    }
}

/// Strip whitespace and check the character set
///
/// Returns the compacted source when the text could be an expression.
pub fn compact(text: &str) -> Option<String> {
    let compacted: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compacted.is_empty() || !compacted.chars().all(|c| ALLOWED.contains(c)) {
        return None;
    }
    Some(compacted)
}

/// Evaluate an arithmetic expression
pub fn evaluate(text: &str) -> Result<Evaluation, DomainError> {
    let source = compact(text)
        .ok_or_else(|| DomainError::InvalidExpression(format!("not an arithmetic expression: {}", text)))?;

    let mut parser = Parser::new(&source);
    let value = parser.expr()?;
    if let Some(c) = parser.peek() {
        return Err(DomainError::InvalidExpression(format!(
            "unexpected '{}' at position {}",
            c, parser.pos
        )));
    }
    if !value.is_finite() {
        return Err(DomainError::Calculation("result out of range".to_string()));
    }

    let integral = !source.contains('.') && !source.contains('/') && value.fract() == 0.0;
    Ok(Evaluation { value, integral })
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn at_power(&self) -> Option<usize> {
        match (self.peek(), self.peek_at(1)) {
            (Some('^'), _) => Some(1),
            (Some('*'), Some('*')) => Some(2),
            _ => None,
        }
    }

    fn expr(&mut self) -> Result<f64, DomainError> {
        let mut value = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, DomainError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some('*') if self.at_power().is_none() => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some('/') => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    if rhs == 0.0 {
                        return Err(DomainError::division_by_zero());
                    }
                    value /= rhs;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, DomainError> {
        if self.depth >= MAX_DEPTH {
            return Err(DomainError::InvalidExpression(
                "expression nested too deeply".to_string(),
            ));
        }
        self.depth += 1;
        let value = self.signed();
        self.depth -= 1;
        value
    }

    fn signed(&mut self) -> Result<f64, DomainError> {
        match self.peek() {
            Some('-') => {
                self.pos += 1;
                Ok(-self.unary()?)
            }
            Some('+') => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, DomainError> {
        let base = self.primary()?;
        if let Some(width) = self.at_power() {
            self.pos += width;
            let exponent = self.unary()?;
            if base == 0.0 && exponent < 0.0 {
                return Err(DomainError::division_by_zero());
            }
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, DomainError> {
        match self.peek() {
            Some('(') => {
                self.pos += 1;
                let value = self.expr()?;
                if self.peek() != Some(')') {
                    return Err(DomainError::InvalidExpression("unbalanced parentheses".to_string()));
                }
                self.pos += 1;
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) => Err(DomainError::InvalidExpression(format!(
                "unexpected '{}' at position {}",
                c, self.pos
            ))),
            None => Err(DomainError::InvalidExpression("unexpected end of expression".to_string())),
        }
    }

    fn number(&mut self) -> Result<f64, DomainError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let literal: String = self.chars[start..self.pos].iter().collect();
        literal
            .parse::<f64>()
            .map_err(|_| DomainError::InvalidExpression(format!("invalid number '{}'", literal)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(text: &str) -> String {
        evaluate(text).unwrap().to_string()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4"), "14");
        assert_eq!(eval("(2+3)*4"), "20");
        assert_eq!(eval("10 - 4 - 3"), "3");
    }

    #[test]
    fn test_division_prints_float() {
        assert_eq!(eval("10/2"), "5.0");
        assert_eq!(eval("7/2"), "3.5");
    }

    #[test]
    fn test_power_operators() {
        assert_eq!(eval("2^3"), "8");
        assert_eq!(eval("2**3"), "8");
        assert_eq!(eval("2^3^2"), "512");
        assert_eq!(eval("-2^2"), "-4");
        assert_eq!(eval("2^-1"), "0.5");
    }

    #[test]
    fn test_decimal_input() {
        assert_eq!(eval("1.5+1.5"), "3.0");
        assert_eq!(eval(".5*4"), "2.0");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("1/0"), Err(DomainError::division_by_zero()));
        assert_eq!(evaluate("1/(2-2)"), Err(DomainError::division_by_zero()));
    }

    #[test]
    fn test_rejects_non_arithmetic() {
        assert!(matches!(evaluate("import os"), Err(DomainError::InvalidExpression(_))));
        assert!(matches!(evaluate("2+x"), Err(DomainError::InvalidExpression(_))));
        assert!(matches!(evaluate(""), Err(DomainError::InvalidExpression(_))));
        assert!(compact("__import__('os')").is_none());
    }

    #[test]
    fn test_malformed() {
        assert!(evaluate("(2+3").is_err());
        assert!(evaluate("2+").is_err());
        assert!(evaluate("2)").is_err());
        assert!(evaluate("1..2").is_err());
        assert!(evaluate("2***3").is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let deep_parens = format!("{}1{}", "(".repeat(30_000), ")".repeat(30_000));
        assert_eq!(
            evaluate(&deep_parens),
            Err(DomainError::InvalidExpression("expression nested too deeply".to_string()))
        );
        let deep_signs = format!("{}1", "-".repeat(60_000));
        assert!(matches!(evaluate(&deep_signs), Err(DomainError::InvalidExpression(_))));
        let power_chain = vec!["2"; 10_000].join("^");
        assert!(matches!(evaluate(&power_chain), Err(DomainError::InvalidExpression(_))));

        let shallow = format!("{}1{}", "(".repeat(50), ")".repeat(50));
        assert_eq!(eval(&shallow), "1");
    }

    #[test]
    fn test_large_integral_prints_integer() {
        assert_eq!(eval("2^60"), "1152921504606846976");
        assert_eq!(eval("10^15"), "1000000000000000");
        assert_eq!(eval("0*-1"), "0");
    }

    #[test]
    fn test_out_of_range() {
        assert!(evaluate("10^400").is_err());
    }
}
