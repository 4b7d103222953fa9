//! Output format value object

use serde::{Deserialize, Serialize};

/// How a reply is printed
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the reply text (default)
    #[default]
    Reply,
    /// Reply plus type, sentiment and solution fields
    Full,
    /// JSON envelope
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reply" => Ok(OutputFormat::Reply),
            "full" => Ok(OutputFormat::Full),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}. Valid: reply, full, json", s)),
        }
    }
}
