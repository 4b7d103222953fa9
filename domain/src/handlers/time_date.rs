//! Time/date handler
//!
//! Reads the local wall clock on every call, so answers change over time
//! while their shape stays fixed. [`TimeDateHandler::solve_at`] takes the
//! timestamp explicitly.

use super::traits::ProblemHandler;
use crate::classifier::HandlerCategory;
use crate::core::query::ProblemQuery;
use crate::solution::{Solution, SolutionType};
use chrono::{DateTime, Local, TimeZone};

fn current_time<Tz: TimeZone>(now: &DateTime<Tz>) -> Solution
where
    Tz::Offset: std::fmt::Display,
{
    Solution::new(
        now.format("%H:%M:%S").to_string(),
        format!("Current time is {}", now.format("%I:%M %p")),
        SolutionType::Time,
    )
}

fn current_date<Tz: TimeZone>(now: &DateTime<Tz>) -> Solution
where
    Tz::Offset: std::fmt::Display,
{
    Solution::new(
        now.format("%Y-%m-%d").to_string(),
        format!("Today is {}", now.format("%A, %B %d, %Y")),
        SolutionType::Date,
    )
}

fn day_of_week<Tz: TimeZone>(now: &DateTime<Tz>) -> Solution
where
    Tz::Offset: std::fmt::Display,
{
    let weekday = now.format("%A").to_string();
    Solution::new(weekday.clone(), format!("Today is {}", weekday), SolutionType::Date)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeDateHandler;

impl TimeDateHandler {
    pub fn new() -> Self {
        Self
    }

    /// Answer relative to a given instant
    pub fn solve_at<Tz: TimeZone>(&self, query: &ProblemQuery, now: &DateTime<Tz>) -> Solution
    where
        Tz::Offset: std::fmt::Display,
    {
        let lower = query.lowercase();
        if lower.contains("current time") {
            current_time(now)
        } else if lower.contains("current date") {
            current_date(now)
        } else if lower.contains("day of week") {
            day_of_week(now)
        } else {
            Solution::new(
                "Time/date information",
                "Based on current datetime calculations",
                SolutionType::TimeDate,
            )
        }
    }
}

impl ProblemHandler for TimeDateHandler {
    fn category(&self) -> HandlerCategory {
        HandlerCategory::TimeDate
    }

    fn solve(&self, query: &ProblemQuery) -> Solution {
        self.solve_at(query, &Local::now())
    }
}
