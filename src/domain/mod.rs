//! Input records for a payoff run: debts, the budget and money helpers.

pub mod budget;
pub mod debt;
pub mod money;

pub use budget::MonthlyBudget;
pub use debt::{normalize_rows, sample_debts, Debt, DebtRow, Normalized, SkipReason, SkippedRow};
pub use money::{format_money, monthly_rate, round_money, MoneyFormat};
