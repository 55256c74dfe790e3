//! Month-by-month debt payoff simulation.

pub mod calendar;
pub mod compare;
pub mod engine;
pub mod strategy;
pub mod types;

pub use calendar::{Clock, FixedClock, MonthCursor, SystemClock};
pub use compare::{compare_strategies, StrategyComparison};
pub use engine::{simulate, PayoffSimulator, MAX_MONTHS};
pub use strategy::{PriorityKey, Strategy};
pub use types::{LedgerEntry, PayoffOutcome, PayoffSchedule, PayoffSummary};
