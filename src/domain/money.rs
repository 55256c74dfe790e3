//! Decimal helpers for money amounts and interest rates.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Rounds an amount to cents for display. Uses half-even rounding.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp(2)
}

/// Converts an APR expressed in percent (e.g. `22.99`) into a monthly rate.
pub fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / PERCENT / MONTHS_PER_YEAR
}

/// Display preferences for rendering amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    pub symbol: String,
    pub grouping_separator: char,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".into(),
            grouping_separator: ',',
        }
    }
}

impl MoneyFormat {
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }
}

/// Formats an amount as `$1,234.50`, rounding to cents first.
pub fn format_money(value: Decimal, format: &MoneyFormat) -> String {
    let rounded = round_money(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!(
        "{sign}{}{}.{cents}",
        format.symbol,
        group_digits(whole, format.grouping_separator)
    )
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
