use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::strategy::Strategy;

/// One debt's activity in one simulated month. Money fields are rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub month: u32,
    pub month_label: String,
    pub debt_index: usize,
    pub debt_name: String,
    pub starting_balance: Decimal,
    pub interest_accrued: Decimal,
    pub principal_applied: Decimal,
    pub payment_total: Decimal,
    pub ending_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayoffOutcome {
    DebtFree,
    /// The month cap was reached with balances still outstanding.
    Unreachable {
        months_simulated: u32,
        remaining_balance: Decimal,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffSummary {
    pub months_to_payoff: u32,
    pub total_interest_paid: Decimal,
    pub total_paid: Decimal,
    pub outcome: PayoffOutcome,
}

impl PayoffSummary {
    pub fn empty() -> Self {
        Self {
            months_to_payoff: 0,
            total_interest_paid: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            outcome: PayoffOutcome::DebtFree,
        }
    }
}

/// Full result of a payoff run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffSchedule {
    pub strategy: Strategy,
    pub monthly_budget: Decimal,
    pub entries: Vec<LedgerEntry>,
    pub summary: PayoffSummary,
}

impl PayoffSchedule {
    pub fn is_complete(&self) -> bool {
        self.summary.outcome == PayoffOutcome::DebtFree
    }

    /// Entries grouped by simulated month, in month order.
    pub fn months(&self) -> Vec<&[LedgerEntry]> {
        self.entries
            .chunk_by(|a, b| a.month == b.month)
            .collect()
    }

    /// Entries in which a debt's balance reached zero, in month order.
    pub fn payoff_entries(&self) -> Vec<&LedgerEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.ending_balance.is_zero())
            .collect()
    }
}
