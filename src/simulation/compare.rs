use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{domain::Debt, errors::Result};

use super::{engine::PayoffSimulator, strategy::Strategy, types::PayoffSchedule};

/// Side-by-side result of running both strategies over the same inputs.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyComparison {
    pub snowball: PayoffSchedule,
    pub avalanche: PayoffSchedule,
}

impl StrategyComparison {
    /// Interest avoided by choosing avalanche over snowball. Negative when snowball is cheaper.
    pub fn interest_saved_by_avalanche(&self) -> Decimal {
        self.snowball.summary.total_interest_paid - self.avalanche.summary.total_interest_paid
    }

    /// The strategy that finishes first, breaking ties on interest. `None` if neither
    /// reaches payoff or both are identical.
    pub fn recommended(&self) -> Option<Strategy> {
        let score = |schedule: &PayoffSchedule| {
            (
                schedule.summary.months_to_payoff,
                schedule.summary.total_interest_paid,
            )
        };
        match (self.snowball.is_complete(), self.avalanche.is_complete()) {
            (false, false) => None,
            (true, false) => Some(Strategy::Snowball),
            (false, true) => Some(Strategy::Avalanche),
            (true, true) => match score(&self.snowball).cmp(&score(&self.avalanche)) {
                std::cmp::Ordering::Less => Some(Strategy::Snowball),
                std::cmp::Ordering::Greater => Some(Strategy::Avalanche),
                std::cmp::Ordering::Equal => None,
            },
        }
    }
}

/// Runs snowball and avalanche over the same debts. Runs share no state.
pub fn compare_strategies(
    simulator: &PayoffSimulator,
    debts: &[Debt],
    monthly_budget: Decimal,
    today: NaiveDate,
) -> Result<StrategyComparison> {
    Ok(StrategyComparison {
        snowball: simulator.run(debts, monthly_budget, Strategy::Snowball, today)?,
        avalanche: simulator.run(debts, monthly_budget, Strategy::Avalanche, today)?,
    })
}
