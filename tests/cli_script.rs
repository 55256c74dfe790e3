mod common;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use regex::Regex;

fn cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("payoff_cli").unwrap();
    cmd.env("PAYOFF_HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn plan_prints_table_and_summary() {
    let home = tempfile::tempdir().unwrap();
    let (_guard, path) = common::debts_file(common::TWO_CARDS);

    cli(home.path())
        .args(["plan", path.to_str().unwrap(), "--start", "2026-10"])
        .assert()
        .success()
        .stdout(
            contains("WARNING: Skipped row 3: starting balance is not positive")
                .and(contains("=== Monthly snowball plan ($2,000.00 per month) ==="))
                .and(contains("Oct 2026"))
                .and(contains("Payoff order: Credit Card A (Oct 2026), Credit Card B (Dec 2026)"))
                .and(contains("OK: Debt free in 3 months")),
        );
}

#[test]
fn plan_reads_stdin_and_emits_json() {
    let home = tempfile::tempdir().unwrap();
    let output = cli(home.path())
        .args([
            "plan",
            "-",
            "--budget",
            "1200",
            "--strategy",
            "avalanche",
            "--start",
            "2026-10-19",
            "--json",
        ])
        .write_stdin(
            r#"[{"name": "Loan", "starting_balance": 1200, "rate_percent": 12, "minimum_payment": 100}]"#,
        )
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let schedule: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(schedule["strategy"], "avalanche");
    assert_eq!(schedule["summary"]["months_to_payoff"], 2);
    assert_eq!(schedule["summary"]["outcome"]["status"], "debt_free");
    assert_eq!(schedule["entries"][1]["month_label"], "Nov 2026");
}

#[test]
fn tiny_budget_surfaces_unreachable_payoff() {
    let home = tempfile::tempdir().unwrap();
    let (_guard, path) = common::debts_file(common::TWO_CARDS);

    let output = cli(home.path())
        .args(["plan", path.to_str().unwrap(), "--budget", "50"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let pattern = Regex::new(r"Payoff not reached within 20 years: \$[\d,]+\.\d{2} still owed after 240 months").unwrap();
    assert!(pattern.is_match(&text), "unexpected output:\n{text}");
    assert!(!text.contains("Debt free"));
}

#[test]
fn compare_reports_both_strategies() {
    let home = tempfile::tempdir().unwrap();
    let (_guard, path) = common::debts_file(
        r#"[
            {"name": "Store card", "starting_balance": 500, "rate_percent": 10, "minimum_payment": 25},
            {"name": "Credit card", "starting_balance": 3000, "rate_percent": 25, "minimum_payment": 60}
        ]"#,
    );

    cli(home.path())
        .args(["compare", path.to_str().unwrap(), "--budget", "400"])
        .assert()
        .success()
        .stdout(
            contains("Strategy comparison")
                .and(contains("snowball"))
                .and(contains("avalanche pays off sooner or cheaper")),
        );
}

#[test]
fn config_defaults_feed_the_plan() {
    let home = tempfile::tempdir().unwrap();

    cli(home.path())
        .args(["config", "set", "default_strategy", "avalanche"])
        .assert()
        .success()
        .stdout(contains("default_strategy set to avalanche"));
    cli(home.path())
        .args(["config", "set", "currency_symbol", "€"])
        .assert()
        .success();

    cli(home.path())
        .args(["plan", "--start", "2026-10"])
        .assert()
        .success()
        .stdout(contains("Monthly avalanche plan (€2,000.00 per month)"));
}

#[test]
fn invalid_input_exits_with_error() {
    let home = tempfile::tempdir().unwrap();

    cli(home.path())
        .args(["plan", "--budget", "-5"])
        .assert()
        .failure()
        .stderr(contains("ERROR: Invalid budget"));

    cli(home.path())
        .args(["plan", "--strategy", "snowbal"])
        .assert()
        .failure()
        .stderr(contains("did you mean `snowball`?"));

    cli(home.path())
        .args(["plan", "/no/such/file.json"])
        .assert()
        .failure()
        .stderr(contains("ERROR: Persistence error"));
}

#[test]
fn sample_and_version_commands() {
    let home = tempfile::tempdir().unwrap();

    cli(home.path())
        .arg("sample")
        .assert()
        .success()
        .stdout(contains("Credit Card A").and(contains("22.99")));

    cli(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(contains(concat!("payoff_cli ", env!("CARGO_PKG_VERSION"))));
}
