//! Temperature conversion handler
//!
//! Only the first number in the text is converted. A matching phrase with no
//! number falls through to the generic "Conversion result" placeholder.

use super::extract::numbers;
use super::traits::ProblemHandler;
use crate::classifier::HandlerCategory;
use crate::core::query::ProblemQuery;
use crate::solution::{Solution, SolutionType};

type Converter = fn(f64) -> Solution;

const CONVERSIONS: &[(&str, Converter)] = &[
    ("celsius to fahrenheit", celsius_to_fahrenheit),
    ("fahrenheit to celsius", fahrenheit_to_celsius),
];

fn celsius_to_fahrenheit(celsius: f64) -> Solution {
    let fahrenheit = celsius * 9.0 / 5.0 + 32.0;
    Solution::new(
        format!("{:.1}°F", fahrenheit),
        format!("{}°C = ({} × 9/5) + 32 = {:.1}°F", celsius, celsius, fahrenheit),
        SolutionType::Conversion,
    )
}

fn fahrenheit_to_celsius(fahrenheit: f64) -> Solution {
    let celsius = (fahrenheit - 32.0) * 5.0 / 9.0;
    Solution::new(
        format!("{:.1}°C", celsius),
        format!("{}°F = ({} - 32) × 5/9 = {:.1}°C", fahrenheit, fahrenheit, celsius),
        SolutionType::Conversion,
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionHandler;

impl ConversionHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ProblemHandler for ConversionHandler {
    fn category(&self) -> HandlerCategory {
        HandlerCategory::Conversion
    }

    fn solve(&self, query: &ProblemQuery) -> Solution {
        let lower = query.lowercase();

        // Only the first phrase present is tried
        if let Some((_, convert)) = CONVERSIONS.iter().find(|(phrase, _)| lower.contains(*phrase))
            && let Some(value) = numbers(query.content()).first()
        {
            return convert(*value);
        }

        Solution::new(
            "Conversion result",
            "Unit conversion using standard formulas",
            SolutionType::Conversion,
        )
    }
}
