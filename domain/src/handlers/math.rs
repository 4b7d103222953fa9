//! Math handler
//!
//! Rules run in table order and the first one that produces a solution wins:
//!
//! 1. literal `0/0` → indeterminate form
//! 2. `infinity` → infinity explanation
//! 3. `a + b` / `a - b` pattern → addition or subtraction
//! 4. `a * b` / `a / b` pattern → multiplication or division
//! 5. `area` with `circle` or `rectangle`
//! 6. `%` or `percent`
//!
//! Operator choice in rules 3 and 4 looks at the whole text, not the span the
//! pattern matched. When `+` appears anywhere, every integer in the text is
//! summed ("12+3+5" is 20, "5-2+1" is 8). The division guard compares the
//! second digit run with the string `"0"`, so "12/0" skips division while
//! "12/00" divides and reports division by zero.

use super::extract::{digit_runs, first_int_or, parse_int};
use super::traits::ProblemHandler;
use crate::classifier::HandlerCategory;
use crate::core::error::DomainError;
use crate::core::query::ProblemQuery;
use crate::core::string::format_float;
use crate::solution::{Solution, SolutionType};
use regex::Regex;
use std::f64::consts::PI;
use std::sync::LazyLock;

static ADD_SUB_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\s*[+\-]\s*[0-9]+").expect("add/sub pattern is valid"));

static MUL_DIV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\s*[*/]\s*[0-9]+").expect("mul/div pattern is valid"));

/// Text a math rule inspects
struct MathInput<'a> {
    raw: &'a str,
    lower: String,
    runs: Vec<&'a str>,
}

impl<'a> MathInput<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
            runs: digit_runs(raw),
        }
    }
}

type MathRule = fn(&MathInput<'_>) -> Result<Option<Solution>, DomainError>;

const MATH_RULES: &[(&str, MathRule)] = &[
    ("indeterminate", indeterminate_form),
    ("infinity", infinity),
    ("add_subtract", add_or_subtract),
    ("multiply_divide", multiply_or_divide),
    ("area", area),
    ("percentage", percentage),
];

fn overflow() -> DomainError {
    DomainError::Calculation("integer overflow".to_string())
}

fn indeterminate_form(input: &MathInput<'_>) -> Result<Option<Solution>, DomainError> {
    if !input.raw.contains("0/0") {
        return Ok(None);
    }
    Ok(Some(
        Solution::new(
            "Indeterminate form (0/0)",
            "0 divided by 0 is undefined and considered an indeterminate form in mathematics. \
             It requires limit analysis for proper evaluation.",
            SolutionType::Mathematics,
        )
        .with_details("Use L'Hôpital's rule or algebraic manipulation for limits"),
    ))
}

fn infinity(input: &MathInput<'_>) -> Result<Option<Solution>, DomainError> {
    if !input.lower.contains("infinity") {
        return Ok(None);
    }
    Ok(Some(
        Solution::new(
            "∞ (Infinity)",
            "Infinity represents an unbounded quantity larger than any real number.",
            SolutionType::Mathematics,
        )
        .with_details("Infinity operations: ∞ + a = ∞, ∞ × ∞ = ∞, a/∞ = 0"),
    ))
}

fn add_or_subtract(input: &MathInput<'_>) -> Result<Option<Solution>, DomainError> {
    if !ADD_SUB_PATTERN.is_match(input.raw) {
        return Ok(None);
    }

    if input.raw.contains('+') {
        let total = input.runs.iter().try_fold(0i64, |acc, run| {
            acc.checked_add(parse_int(run)?).ok_or_else(overflow)
        })?;
        return Ok(Some(Solution::new(
            total,
            format!("Addition: {} = {}", input.runs.join(" + "), total),
            SolutionType::Arithmetic,
        )));
    }

    if input.raw.contains('-') {
        let [a, b, ..] = input.runs.as_slice() else {
            return Ok(None);
        };
        let diff = parse_int(a)?
            .checked_sub(parse_int(b)?)
            .ok_or_else(overflow)?;
        return Ok(Some(Solution::new(
            diff,
            format!("Subtraction: {} - {} = {}", a, b, diff),
            SolutionType::Arithmetic,
        )));
    }

    Ok(None)
}

fn multiply_or_divide(input: &MathInput<'_>) -> Result<Option<Solution>, DomainError> {
    if !MUL_DIV_PATTERN.is_match(input.raw) {
        return Ok(None);
    }
    let [a, b, ..] = input.runs.as_slice() else {
        return Ok(None);
    };

    if input.raw.contains('*') {
        let product = parse_int(a)?
            .checked_mul(parse_int(b)?)
            .ok_or_else(overflow)?;
        return Ok(Some(Solution::new(
            product,
            format!("Multiplication: {} × {} = {}", a, b, product),
            SolutionType::Arithmetic,
        )));
    }

    if input.raw.contains('/') && *b != "0" {
        let denominator = parse_int(b)?;
        if denominator == 0 {
            return Err(DomainError::division_by_zero());
        }
        let quotient = parse_int(a)? as f64 / denominator as f64;
        return Ok(Some(Solution::new(
            quotient,
            format!("Division: {} ÷ {} = {}", a, b, format_float(quotient)),
            SolutionType::Arithmetic,
        )));
    }

    Ok(None)
}

fn area(input: &MathInput<'_>) -> Result<Option<Solution>, DomainError> {
    if !input.lower.contains("area") {
        return Ok(None);
    }

    if input.lower.contains("circle") {
        let radius = first_int_or(input.raw, 1)?;
        let area = PI * (radius as f64).powi(2);
        return Ok(Some(Solution::new(
            format!("{:.2}", area),
            format!(
                "Area of circle with radius {} = π × r² = {:.2} × {}²",
                radius, PI, radius
            ),
            SolutionType::Geometry,
        )));
    }

    if input.lower.contains("rectangle")
        && let [a, b, ..] = input.runs.as_slice()
    {
        let area = parse_int(a)?
            .checked_mul(parse_int(b)?)
            .ok_or_else(overflow)?;
        return Ok(Some(Solution::new(
            area,
            format!("Area of rectangle: {} × {} = {}", a, b, area),
            SolutionType::Geometry,
        )));
    }

    Ok(None)
}

fn percentage(input: &MathInput<'_>) -> Result<Option<Solution>, DomainError> {
    if !(input.raw.contains('%') || input.lower.contains("percent")) {
        return Ok(None);
    }
    let [a, b, ..] = input.runs.as_slice() else {
        return Ok(None);
    };

    let denominator = parse_int(b)?;
    if denominator == 0 {
        return Err(DomainError::division_by_zero());
    }
    let pct = parse_int(a)? as f64 / denominator as f64 * 100.0;
    Ok(Some(Solution::new(
        format!("{:.1}%", pct),
        format!("Percentage: ({} ÷ {}) × 100 = {:.1}%", a, b, pct),
        SolutionType::Mathematics,
    )))
}

fn placeholder() -> Solution {
    Solution::new(
        "Complex mathematical problem",
        "This requires advanced mathematical analysis.",
        SolutionType::Mathematics,
    )
}

/// Arithmetic, geometry and percentage handler
#[derive(Debug, Clone, Copy, Default)]
pub struct MathHandler;

impl MathHandler {
    pub fn new() -> Self {
        Self
    }

    /// Run the rule table, returning the matching rule's name with its solution
    ///
    /// `Ok(None)` means no rule matched. The first failing rule stops the
    /// cascade.
    pub fn evaluate(&self, text: &str) -> Result<Option<(&'static str, Solution)>, DomainError> {
        let input = MathInput::new(text);
        for (name, rule) in MATH_RULES {
            if let Some(solution) = rule(&input)? {
                return Ok(Some((*name, solution)));
            }
        }
        Ok(None)
    }
}

impl ProblemHandler for MathHandler {
    fn category(&self) -> HandlerCategory {
        HandlerCategory::Math
    }

    fn solve(&self, query: &ProblemQuery) -> Solution {
        match self.evaluate(query.content()) {
            Ok(Some((_, solution))) => solution,
            Ok(None) => placeholder(),
            Err(e) => Solution::error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::Answer;

    fn solve(text: &str) -> Solution {
        MathHandler::new().solve(&ProblemQuery::new(text))
    }

    #[test]
    fn test_indeterminate_form_wins_over_everything() {
        for text in ["0/0", "what is 0/0 + 5", "infinity and 0/0", "area of circle 0/0"] {
            let s = solve(text);
            assert_eq!(s.answer.as_text(), Some("Indeterminate form (0/0)"), "{}", text);
            assert_eq!(s.kind, SolutionType::Mathematics);
            assert!(s.details.is_some());
        }
    }

    #[test]
    fn test_infinity_case_insensitive() {
        let s = solve("What is INFINITY plus 1?");
        assert_eq!(s.answer.as_text(), Some("∞ (Infinity)"));
    }

    #[test]
    fn test_addition() {
        let s = solve("what is 2+3");
        assert_eq!(s.answer, Answer::Integer(5));
        assert_eq!(s.explanation, "Addition: 2 + 3 = 5");
        assert_eq!(s.kind, SolutionType::Arithmetic);
    }

    #[test]
    fn test_addition_sums_every_integer() {
        assert_eq!(solve("12+3+5").answer, Answer::Integer(20));
        // a stray '+' elsewhere turns a subtraction into a sum of all runs
        assert_eq!(solve("5-2 +1").answer, Answer::Integer(8));
    }

    #[test]
    fn test_subtraction() {
        let s = solve("5-2");
        assert_eq!(s.answer, Answer::Integer(3));
        assert_eq!(s.explanation, "Subtraction: 5 - 2 = 3");
    }

    #[test]
    fn test_subtraction_uses_first_two_runs() {
        assert_eq!(solve("10 - 4 - 3").answer, Answer::Integer(6));
    }

    #[test]
    fn test_multiplication() {
        let s = solve("4*6");
        assert_eq!(s.answer, Answer::Integer(24));
        assert_eq!(s.explanation, "Multiplication: 4 × 6 = 24");
    }

    #[test]
    fn test_division_is_float() {
        let s = solve("10/2");
        assert_eq!(s.answer, Answer::Float(5.0));
        assert_eq!(s.explanation, "Division: 10 ÷ 2 = 5.0");
    }

    #[test]
    fn test_ten_over_zero_contains_zero_over_zero() {
        // "10/0" contains the literal "0/0"
        let s = solve("10/0");
        assert_eq!(s.answer.as_text(), Some("Indeterminate form (0/0)"));
    }

    #[test]
    fn test_zero_denominator_string_skips_division() {
        let s = solve("12/0");
        assert_eq!(s.answer.as_text(), Some("Complex mathematical problem"));
    }

    #[test]
    fn test_padded_zero_denominator_is_error() {
        let s = solve("12/00");
        assert!(s.is_error());
        assert_eq!(s.answer.as_text(), Some("Unable to solve"));
        assert_eq!(s.explanation, "Error in calculation: division by zero");
    }

    #[test]
    fn test_circle_area() {
        let s = solve("area of a circle with radius 3");
        assert_eq!(s.answer.as_text(), Some("28.27"));
        assert_eq!(s.kind, SolutionType::Geometry);
        assert_eq!(s.explanation, "Area of circle with radius 3 = π × r² = 3.14 × 3²");
    }

    #[test]
    fn test_circle_area_default_radius() {
        assert_eq!(solve("area of a circle").answer.as_text(), Some("3.14"));
    }

    #[test]
    fn test_rectangle_area() {
        let s = solve("area of a rectangle 4 by 5");
        assert_eq!(s.answer, Answer::Integer(20));
        assert_eq!(s.explanation, "Area of rectangle: 4 × 5 = 20");
    }

    #[test]
    fn test_rectangle_needs_two_numbers() {
        let s = solve("area of a rectangle 4");
        assert_eq!(s.answer.as_text(), Some("Complex mathematical problem"));
    }

    #[test]
    fn test_percentage() {
        let s = solve("what percent is 25 of 200");
        assert_eq!(s.answer.as_text(), Some("12.5%"));
        assert_eq!(s.explanation, "Percentage: (25 ÷ 200) × 100 = 12.5%");
        assert_eq!(s.kind, SolutionType::Mathematics);
    }

    #[test]
    fn test_percentage_zero_denominator_is_error() {
        let s = solve("5 of 0 in %");
        assert!(s.is_error());
    }

    #[test]
    fn test_overflow_is_error_not_panic() {
        let s = solve("99999999999999999999+1");
        assert!(s.is_error());
        assert!(s.explanation.starts_with("Error in calculation:"));

        let s = solve("9223372036854775807*2");
        assert_eq!(s.explanation, "Error in calculation: integer overflow");
    }

    #[test]
    fn test_placeholder() {
        let s = solve("solve for the meaning of life");
        assert_eq!(s.answer.as_text(), Some("Complex mathematical problem"));
        assert_eq!(s.explanation, "This requires advanced mathematical analysis.");
    }

    #[test]
    fn test_evaluate_reports_rule() {
        let (rule, _) = MathHandler::new().evaluate("4*6").unwrap().unwrap();
        assert_eq!(rule, "multiply_divide");
        assert!(MathHandler::new().evaluate("hello").unwrap().is_none());
    }
}
