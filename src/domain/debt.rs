use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A validated debt fed into the payoff simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    pub name: String,
    pub starting_balance: Decimal,
    pub annual_rate_percent: Decimal,
    pub minimum_payment: Decimal,
}

impl Debt {
    pub fn new(
        name: impl Into<String>,
        starting_balance: Decimal,
        annual_rate_percent: Decimal,
        minimum_payment: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            starting_balance,
            annual_rate_percent,
            minimum_payment,
        }
    }
}

/// Raw row as supplied by an input collector. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtRow {
    #[serde(default, alias = "Debt Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Starting Balance")]
    pub starting_balance: Option<Decimal>,
    #[serde(default, alias = "Interest Rate (%)", alias = "annual_rate_percent")]
    pub rate_percent: Option<Decimal>,
    #[serde(default, alias = "Minimum Payment")]
    pub minimum_payment: Option<Decimal>,
}

impl From<&Debt> for DebtRow {
    fn from(debt: &Debt) -> Self {
        Self {
            name: Some(debt.name.clone()),
            starting_balance: Some(debt.starting_balance),
            rate_percent: Some(debt.annual_rate_percent),
            minimum_payment: Some(debt.minimum_payment),
        }
    }
}

/// Why an input row was left out of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingField(&'static str),
    NonPositiveBalance,
    NegativeRate,
    NegativeMinimum,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingField(field) => write!(f, "missing {field}"),
            SkipReason::NonPositiveBalance => f.write_str("starting balance is not positive"),
            SkipReason::NegativeRate => f.write_str("interest rate is negative"),
            SkipReason::NegativeMinimum => f.write_str("minimum payment is negative"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub index: usize,
    pub reason: SkipReason,
}

/// Output of [`normalize_rows`]: the debts to simulate plus the rows dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub debts: Vec<Debt>,
    pub skipped: Vec<SkippedRow>,
}

/// Drops incomplete or invalid rows, preserving order and names of the rest.
pub fn normalize_rows(rows: &[DebtRow]) -> Normalized {
    let mut normalized = Normalized::default();
    for (index, row) in rows.iter().enumerate() {
        match validate_row(row) {
            Ok(debt) => normalized.debts.push(debt),
            Err(reason) => {
                warn!(row = index, %reason, "skipping debt row");
                normalized.skipped.push(SkippedRow { index, reason });
            }
        }
    }
    normalized
}

fn validate_row(row: &DebtRow) -> Result<Debt, SkipReason> {
    let name = row
        .name
        .clone()
        .ok_or(SkipReason::MissingField("name"))?;
    let balance = row
        .starting_balance
        .ok_or(SkipReason::MissingField("starting balance"))?;
    let rate = row
        .rate_percent
        .ok_or(SkipReason::MissingField("interest rate"))?;
    let minimum = row
        .minimum_payment
        .ok_or(SkipReason::MissingField("minimum payment"))?;

    if balance <= Decimal::ZERO {
        return Err(SkipReason::NonPositiveBalance);
    }
    if rate < Decimal::ZERO {
        return Err(SkipReason::NegativeRate);
    }
    if minimum < Decimal::ZERO {
        return Err(SkipReason::NegativeMinimum);
    }
    Ok(Debt::new(name, balance, rate, minimum))
}

/// Two credit cards used to pre-populate an empty plan.
pub fn sample_debts() -> Vec<Debt> {
    vec![
        Debt::new("Credit Card A", dec!(1500), dec!(22.99), dec!(50)),
        Debt::new("Credit Card B", dec!(3000), dec!(19.99), dec!(75)),
    ]
}
