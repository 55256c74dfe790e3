//! Command-line front end: reads debt rows, runs the simulator, prints the plan.

pub mod args;
pub mod output;
pub mod render;
pub mod table;

use std::io::{self, Write};

use crate::{
    config::{Config, ConfigManager, CONFIG_KEYS},
    domain::{normalize_rows, sample_debts, DebtRow, MonthlyBudget, Normalized},
    errors::{CliError, PayoffError},
    simulation::{compare_strategies, Clock, PayoffSimulator, SystemClock},
    utils::{build_info, input::read_debt_rows},
};

use args::PlanArgs;
use output::Formatter;

/// Entry point used by the `payoff_cli` binary. `args` excludes the program name.
pub fn run_cli(args: &[String]) -> Result<(), CliError> {
    let manager = ConfigManager::new();
    let mut stdout = io::stdout().lock();
    run_with(args, &manager, &SystemClock, &mut stdout)
}

/// Dispatches a command, writing user-facing output to `out`.
pub fn run_with(
    args: &[String],
    manager: &ConfigManager,
    clock: &dyn Clock,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let Some((command, rest)) = args.split_first() else {
        writeln!(out, "{}", usage())?;
        return Ok(());
    };

    match command.as_str() {
        "plan" => plan(rest, manager, clock, out),
        "compare" => compare(rest, manager, clock, out),
        "sample" => {
            let rows: Vec<DebtRow> = sample_debts().iter().map(DebtRow::from).collect();
            let json = serde_json::to_string_pretty(&rows).map_err(PayoffError::from)?;
            writeln!(out, "{json}")?;
            Ok(())
        }
        "config" => config(rest, manager, out),
        "version" | "--version" => {
            writeln!(out, "{}", build_info::current().summary())?;
            Ok(())
        }
        "help" | "--help" | "-h" => {
            writeln!(out, "{}", usage())?;
            Ok(())
        }
        other => Err(CliError::Usage(format!(
            "unknown command `{other}`\n{}",
            usage()
        ))),
    }
}

struct PreparedRun {
    normalized: Normalized,
    budget: MonthlyBudget,
    config: Config,
    args: PlanArgs,
}

fn prepare(rest: &[String], manager: &ConfigManager) -> Result<PreparedRun, CliError> {
    let args = PlanArgs::parse(rest)?;
    let config = manager.load()?;
    let normalized = match args.source.as_deref() {
        Some(source) => normalize_rows(&read_debt_rows(source)?),
        None => Normalized {
            debts: sample_debts(),
            skipped: Vec::new(),
        },
    };
    let budget = MonthlyBudget::new(
        args.base_budget.unwrap_or(config.base_budget),
        args.extra_budget.unwrap_or(config.extra_budget),
    )?;
    Ok(PreparedRun {
        normalized,
        budget,
        config,
        args,
    })
}

fn plan(
    rest: &[String],
    manager: &ConfigManager,
    clock: &dyn Clock,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let run = prepare(rest, manager)?;
    let strategy = run.args.strategy.unwrap_or(run.config.default_strategy);
    let today = run.args.start.unwrap_or_else(|| clock.today());
    let schedule = PayoffSimulator::new().run(
        &run.normalized.debts,
        run.budget.total(),
        strategy,
        today,
    )?;

    if run.args.json {
        let json = serde_json::to_string_pretty(&schedule).map_err(PayoffError::from)?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    let fmt = Formatter::from_env(run.config.color_enabled);
    let money = run.config.money_format();
    for line in render::render_schedule(&schedule, &run.normalized.skipped, &fmt, &money) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn compare(
    rest: &[String],
    manager: &ConfigManager,
    clock: &dyn Clock,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let run = prepare(rest, manager)?;
    if run.args.strategy.is_some() {
        return Err(CliError::Usage(
            "`compare` runs both strategies; drop --strategy".into(),
        ));
    }
    let today = run.args.start.unwrap_or_else(|| clock.today());
    let comparison = compare_strategies(
        &PayoffSimulator::new(),
        &run.normalized.debts,
        run.budget.total(),
        today,
    )?;

    if run.args.json {
        let json =
            serde_json::to_string_pretty(&comparison).map_err(PayoffError::from)?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    let fmt = Formatter::from_env(run.config.color_enabled);
    for row in &run.normalized.skipped {
        writeln!(
            out,
            "{}",
            fmt.warning(format!("Skipped row {}: {}", row.index + 1, row.reason))
        )?;
    }
    for line in render::render_comparison(&comparison, &fmt, &run.config.money_format()) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn config(rest: &[String], manager: &ConfigManager, out: &mut dyn Write) -> Result<(), CliError> {
    match rest {
        [] => config_show(manager, out),
        [action] if action == "show" => config_show(manager, out),
        [action, key, value] if action == "set" => {
            let mut config = manager.load()?;
            config.set(key, value)?;
            manager.save(&config)?;
            writeln!(
                out,
                "{}",
                Formatter::from_env(config.color_enabled).success(format!("{key} set to {value}"))
            )?;
            Ok(())
        }
        _ => Err(CliError::Usage(format!(
            "usage: config [show | set <key> <value>] (keys: {})",
            CONFIG_KEYS.join(", ")
        ))),
    }
}

fn config_show(manager: &ConfigManager, out: &mut dyn Write) -> Result<(), CliError> {
    let config = manager.load()?;
    let json = serde_json::to_string_pretty(&config).map_err(PayoffError::from)?;
    writeln!(out, "# {}", manager.path().display())?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn usage() -> String {
    "Usage: payoff_cli <command>\n\
     Commands:\n  \
     plan [debts.json|-] [--strategy snowball|avalanche] [--budget N] [--extra N] [--start YYYY-MM] [--json]\n  \
     compare [debts.json|-] [--budget N] [--extra N] [--start YYYY-MM] [--json]\n  \
     sample\n  \
     config [show | set <key> <value>]\n  \
     version"
        .to_string()
}
