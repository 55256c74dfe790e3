use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::PayoffError;

const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Ordering heuristic deciding which debt receives the leftover budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Smallest current balance first.
    #[default]
    Snowball,
    /// Highest interest rate first.
    Avalanche,
}

/// Sort key produced by [`Strategy::priority_key`]; lower keys are paid first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PriorityKey(Decimal);

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Snowball, Strategy::Avalanche];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Snowball => "snowball",
            Strategy::Avalanche => "avalanche",
        }
    }

    pub fn priority_key(self, balance: Decimal, annual_rate_percent: Decimal) -> PriorityKey {
        match self {
            Strategy::Snowball => PriorityKey(balance),
            Strategy::Avalanche => PriorityKey(-annual_rate_percent),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = PayoffError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        if let Some(strategy) = Strategy::ALL.into_iter().find(|s| s.as_str() == needle) {
            return Ok(strategy);
        }
        let suggestion = Strategy::ALL
            .into_iter()
            .map(|s| (s, strsim::jaro_winkler(&needle, s.as_str())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(s, _)| s.as_str().to_string());
        Err(PayoffError::UnknownStrategy {
            value: value.to_string(),
            suggestion,
        })
    }
}
