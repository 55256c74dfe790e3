#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Writes `json` into a fresh temp dir; keep the guard alive for the test.
pub fn debts_file(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("debts.json");
    std::fs::write(&path, json).expect("write debts file");
    (dir, path)
}

pub const TWO_CARDS: &str = r#"[
    {"Debt Name": "Credit Card A", "Starting Balance": 1500, "Interest Rate (%)": 22.99, "Minimum Payment": 50},
    {"Debt Name": "Credit Card B", "Starting Balance": 3000, "Interest Rate (%)": 19.99, "Minimum Payment": 75},
    {"Debt Name": "Paid Off", "Starting Balance": 0, "Interest Rate (%)": 5, "Minimum Payment": 10}
]"#;
