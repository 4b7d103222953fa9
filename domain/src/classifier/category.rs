//! Handler category value object

use serde::{Deserialize, Serialize};

/// The six problem buckets a query can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerCategory {
    Math,
    Physics,
    Programming,
    TimeDate,
    Conversion,
    Logic,
}

impl HandlerCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerCategory::Math => "math",
            HandlerCategory::Physics => "physics",
            HandlerCategory::Programming => "programming",
            HandlerCategory::TimeDate => "time_date",
            HandlerCategory::Conversion => "conversion",
            HandlerCategory::Logic => "logic",
        }
    }

    pub fn all() -> [HandlerCategory; 6] {
        [
            HandlerCategory::Math,
            HandlerCategory::Physics,
            HandlerCategory::Programming,
            HandlerCategory::TimeDate,
            HandlerCategory::Conversion,
            HandlerCategory::Logic,
        ]
    }
}

impl std::fmt::Display for HandlerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HandlerCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "math" => Ok(HandlerCategory::Math),
            "physics" => Ok(HandlerCategory::Physics),
            "programming" => Ok(HandlerCategory::Programming),
            "time_date" | "time-date" => Ok(HandlerCategory::TimeDate),
            "conversion" => Ok(HandlerCategory::Conversion),
            "logic" => Ok(HandlerCategory::Logic),
            _ => Err(format!(
                "Unknown category: {}. Valid: math, physics, programming, time_date, conversion, logic",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for category in HandlerCategory::all() {
            assert_eq!(category.to_string().parse::<HandlerCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert!("chemistry".parse::<HandlerCategory>().is_err());
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&HandlerCategory::TimeDate).unwrap();
        assert_eq!(json, "\"time_date\"");
    }
}
