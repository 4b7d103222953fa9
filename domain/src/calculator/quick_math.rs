//! Calculator-mode math replies
//!
//! A lighter path than the math handler, producing a ready-made reply line:
//!
//! 1. `0/0` (spacing allowed) → indeterminate form
//! 2. `N/0...` → division by zero is undefined
//! 3. whole text is an arithmetic expression → `Calculation: <text> = <value>`
//! 4. a "calculate"/"solve"/"what is" question with two numbers → the first
//!    operator found among `+ - * /` is applied to the first two numbers
//!
//! `None` means the text is not something this path answers.

use super::expression::{compact, evaluate};
use crate::core::string::format_float;
use crate::handlers::extract::digit_runs;
use regex::Regex;
use std::sync::LazyLock;

static ZERO_OVER_ZERO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0\s*/\s*0").expect("zero over zero pattern is valid"));

static OVER_ZERO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*/\s*0").expect("over zero pattern is valid"));

const QUESTION_WORDS: &[&str] = &["calculate", "solve", "what is"];

const INDETERMINATE_REPLY: &str = "0/0 is an indeterminate form. 🚫\n\
In mathematics, 0 divided by 0 is undefined and considered an indeterminate form.\n\
This means it could potentially equal any number, depending on the context.";

/// Answer a math-looking message, or `None` to let the caller move on
pub fn quick_math(text: &str) -> Option<String> {
    let lower = text.to_lowercase();

    if ZERO_OVER_ZERO.is_match(&lower) {
        return Some(INDETERMINATE_REPLY.to_string());
    }

    if let Some(caps) = OVER_ZERO.captures(&lower) {
        let number = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        return Some(format!(
            "{}/0 is undefined! ❌\nDivision by zero is undefined in mathematics.\n\
             As the denominator approaches zero, the value approaches infinity.",
            number
        ));
    }

    if compact(text).is_some()
        && let Ok(result) = evaluate(text)
    {
        return Some(format!("Calculation: {} = {}", text, result));
    }

    if QUESTION_WORDS.iter().any(|w| lower.contains(*w)) {
        return two_number_reply(text);
    }

    None
}

fn two_number_reply(text: &str) -> Option<String> {
    let runs = digit_runs(text);
    let [a, b, ..] = runs.as_slice() else {
        return None;
    };
    let x: i64 = a.parse().ok()?;
    let y: i64 = b.parse().ok()?;

    if text.contains('+') {
        Some(format!("Addition: {} + {} = {}", a, b, x.checked_add(y)?))
    } else if text.contains('-') {
        Some(format!("Subtraction: {} - {} = {}", a, b, x.checked_sub(y)?))
    } else if text.contains('*') {
        Some(format!("Multiplication: {} × {} = {}", a, b, x.checked_mul(y)?))
    } else if text.contains('/') && *b != "0" && y != 0 {
        Some(format!(
            "Division: {} ÷ {} = {}",
            a,
            b,
            format_float(x as f64 / y as f64)
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_over_zero() {
        let reply = quick_math("what is 0 / 0").unwrap();
        assert!(reply.starts_with("0/0 is an indeterminate form."));
    }

    #[test]
    fn test_number_over_zero() {
        let reply = quick_math("5/0").unwrap();
        assert!(reply.starts_with("5/0 is undefined!"));
    }

    #[test]
    fn test_pure_expression() {
        assert_eq!(quick_math("2+3*4").unwrap(), "Calculation: 2+3*4 = 14");
        assert_eq!(quick_math("2 ^ 3").unwrap(), "Calculation: 2 ^ 3 = 8");
        assert_eq!(quick_math("7/2").unwrap(), "Calculation: 7/2 = 3.5");
    }

    #[test]
    fn test_question_with_two_numbers() {
        assert_eq!(quick_math("what is 7 + 8?").unwrap(), "Addition: 7 + 8 = 15");
        assert_eq!(quick_math("calculate 9 - 4 please").unwrap(), "Subtraction: 9 - 4 = 5");
        assert_eq!(quick_math("solve 6*7 now").unwrap(), "Multiplication: 6 × 7 = 42");
        assert_eq!(quick_math("what is 9/3?").unwrap(), "Division: 9 ÷ 3 = 3.0");
    }

    #[test]
    fn test_question_adds_only_first_two() {
        assert_eq!(quick_math("what is 1+2+3?").unwrap(), "Addition: 1 + 2 = 3");
    }

    #[test]
    fn test_never_evaluates_code() {
        assert_eq!(quick_math("__import__('os').system('ls')"), None);
        assert_eq!(quick_math("hello there"), None);
    }

    #[test]
    fn test_question_without_operator() {
        assert_eq!(quick_math("what is 3 and 4"), None);
    }

    #[test]
    fn test_malformed_expression_falls_through() {
        assert_eq!(quick_math("(2+3"), None);
    }

    #[test]
    fn test_deeply_nested_input_falls_through() {
        let nested = format!("{}1{}", "(".repeat(30_000), ")".repeat(30_000));
        assert_eq!(quick_math(&nested), None);
        assert_eq!(quick_math(&format!("{}1", "-".repeat(60_000))), None);
    }
}
