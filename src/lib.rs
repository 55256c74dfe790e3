#![doc(test(attr(deny(warnings))))]

//! Payoff Core computes month-by-month debt payoff schedules for a fixed
//! monthly budget using the snowball or avalanche strategy.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod simulation;
pub mod utils;

pub use domain::{Debt, DebtRow, MonthlyBudget};
pub use errors::{CliError, PayoffError};
pub use simulation::{simulate, PayoffSchedule, PayoffSimulator, Strategy};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Payoff Core tracing initialized.");
    });
}
