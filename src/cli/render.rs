use std::collections::HashSet;

use crate::{
    domain::{format_money, MoneyFormat, SkippedRow},
    simulation::{PayoffOutcome, PayoffSchedule, StrategyComparison, MAX_MONTHS},
};

use super::{
    output::Formatter,
    table::{Table, TableColumn},
};

/// Renders a full plan: monthly table, payoff order and the summary line.
pub fn render_schedule(
    schedule: &PayoffSchedule,
    skipped: &[SkippedRow],
    fmt: &Formatter,
    money: &MoneyFormat,
) -> Vec<String> {
    let mut lines = Vec::new();
    for row in skipped {
        lines.push(fmt.warning(format!("Skipped row {}: {}", row.index + 1, row.reason)));
    }
    lines.push(fmt.header(format!(
        "Monthly {} plan ({} per month)",
        schedule.strategy,
        format_money(schedule.monthly_budget, money)
    )));

    if schedule.entries.is_empty() {
        lines.push("No debts with a positive balance to pay off.".into());
    } else {
        lines.extend(ledger_table(schedule, money).render());
        let order = payoff_order(schedule);
        if !order.is_empty() {
            lines.push(String::new());
            lines.push(format!("Payoff order: {}", order.join(", ")));
        }
    }
    lines.push(summary_line(schedule, fmt, money));
    lines
}

fn ledger_table(schedule: &PayoffSchedule, money: &MoneyFormat) -> Table {
    let mut table = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::left("Debt Name"),
        TableColumn::right("Starting Balance"),
        TableColumn::right("Interest"),
        TableColumn::right("Principal"),
        TableColumn::right("Payment"),
        TableColumn::right("Ending Balance"),
    ]);
    for entry in &schedule.entries {
        table.add_row(vec![
            entry.month_label.clone(),
            entry.debt_name.clone(),
            format_money(entry.starting_balance, money),
            format_money(entry.interest_accrued, money),
            format_money(entry.principal_applied, money),
            format_money(entry.payment_total, money),
            format_money(entry.ending_balance, money),
        ]);
    }
    table
}

fn payoff_order(schedule: &PayoffSchedule) -> Vec<String> {
    let mut seen = HashSet::new();
    schedule
        .payoff_entries()
        .into_iter()
        .filter(|entry| seen.insert(entry.debt_index))
        .map(|entry| format!("{} ({})", entry.debt_name, entry.month_label))
        .collect()
}

pub fn summary_line(schedule: &PayoffSchedule, fmt: &Formatter, money: &MoneyFormat) -> String {
    let summary = &schedule.summary;
    match &summary.outcome {
        PayoffOutcome::DebtFree => fmt.success(format!(
            "Debt free in {} months with {} in total interest paid.",
            summary.months_to_payoff,
            format_money(summary.total_interest_paid, money)
        )),
        PayoffOutcome::Unreachable {
            months_simulated,
            remaining_balance,
        } => fmt.warning(format!(
            "Payoff not reached within {} years: {} still owed after {} months. Increase the monthly budget.",
            MAX_MONTHS / 12,
            format_money(*remaining_balance, money),
            months_simulated
        )),
    }
}

/// Renders the side-by-side strategy summary.
pub fn render_comparison(
    comparison: &StrategyComparison,
    fmt: &Formatter,
    money: &MoneyFormat,
) -> Vec<String> {
    let mut lines = vec![fmt.header(format!(
        "Strategy comparison ({} per month)",
        format_money(comparison.snowball.monthly_budget, money)
    ))];
    let mut table = Table::new(vec![
        TableColumn::left("Strategy"),
        TableColumn::right("Months"),
        TableColumn::right("Total Interest"),
        TableColumn::right("Total Paid"),
        TableColumn::left("Status"),
    ]);
    for schedule in [&comparison.snowball, &comparison.avalanche] {
        let status = if schedule.is_complete() {
            "debt free"
        } else {
            "not reached"
        };
        table.add_row(vec![
            schedule.strategy.to_string(),
            schedule.summary.months_to_payoff.to_string(),
            format_money(schedule.summary.total_interest_paid, money),
            format_money(schedule.summary.total_paid, money),
            status.to_string(),
        ]);
    }
    lines.extend(table.render());

    match comparison.recommended() {
        Some(strategy) => {
            let saved = comparison.interest_saved_by_avalanche().abs();
            lines.push(fmt.success(format!(
                "{strategy} pays off sooner or cheaper ({} interest difference).",
                format_money(saved, money)
            )));
        }
        None if comparison.snowball.is_complete() => {
            lines.push(fmt.success("Both strategies produce the same plan."));
        }
        None => lines.push(fmt.warning(format!(
            "Neither strategy reaches payoff within {} years.",
            MAX_MONTHS / 12
        ))),
    }
    lines
}
