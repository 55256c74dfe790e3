use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{PayoffError, Result};

/// Monthly payment budget split into a recurring base and a one-off extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    pub base: Decimal,
    #[serde(default)]
    pub extra: Decimal,
}

impl Default for MonthlyBudget {
    fn default() -> Self {
        Self {
            base: dec!(2000),
            extra: Decimal::ZERO,
        }
    }
}

impl MonthlyBudget {
    pub fn new(base: Decimal, extra: Decimal) -> Result<Self> {
        for part in [base, extra] {
            if part < Decimal::ZERO {
                return Err(PayoffError::InvalidBudget(part));
            }
        }
        Ok(Self { base, extra })
    }

    pub fn total(&self) -> Decimal {
        self.base + self.extra
    }
}
