use std::result::Result as StdResult;

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type shared by the payoff engine, input handling and configuration.
#[derive(Debug, Error)]
pub enum PayoffError {
    #[error("Invalid budget: monthly budget must not be negative (got {0})")]
    InvalidBudget(Decimal),
    #[error("Unknown strategy `{value}`{}", suggestion_suffix(.suggestion))]
    UnknownStrategy {
        value: String,
        suggestion: Option<String>,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, PayoffError>;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] PayoffError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("{0}")]
    Usage(String),
}

impl From<std::io::Error> for PayoffError {
    fn from(err: std::io::Error) -> Self {
        PayoffError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PayoffError {
    fn from(err: serde_json::Error) -> Self {
        PayoffError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Core(err.into())
    }
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean `{name}`?)"),
        None => String::new(),
    }
}
