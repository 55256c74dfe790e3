use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{errors::CliError, simulation::Strategy};

/// Options shared by the `plan` and `compare` commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanArgs {
    pub source: Option<String>,
    pub strategy: Option<Strategy>,
    pub base_budget: Option<Decimal>,
    pub extra_budget: Option<Decimal>,
    pub start: Option<NaiveDate>,
    pub json: bool,
}

impl PlanArgs {
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut parsed = PlanArgs::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--strategy" | "-s" => {
                    parsed.strategy = Some(value_for(arg, iter.next())?.parse()?);
                }
                "--budget" | "-b" => {
                    parsed.base_budget = Some(parse_amount(arg, value_for(arg, iter.next())?)?);
                }
                "--extra" | "-e" => {
                    parsed.extra_budget = Some(parse_amount(arg, value_for(arg, iter.next())?)?);
                }
                "--start" => parsed.start = Some(parse_start(value_for(arg, iter.next())?)?),
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown option `{flag}`")));
                }
                positional => {
                    if parsed.source.is_some() {
                        return Err(CliError::Usage(format!(
                            "unexpected argument `{positional}`"
                        )));
                    }
                    parsed.source = Some(positional.to_string());
                }
            }
        }
        Ok(parsed)
    }
}

fn value_for<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str, CliError> {
    value
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("option `{flag}` requires a value")))
}

fn parse_amount(flag: &str, value: &str) -> Result<Decimal, CliError> {
    Decimal::from_str(value.trim())
        .map_err(|_| CliError::Input(format!("`{value}` is not a valid amount for {flag}")))
}

/// Accepts `YYYY-MM` or `YYYY-MM-DD`.
fn parse_start(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"))
        .map_err(|_| CliError::Input(format!("`{value}` is not a valid start month (YYYY-MM)")))
}
