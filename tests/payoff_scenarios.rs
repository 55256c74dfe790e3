mod common;

use payoff_core::{
    domain::{sample_debts, Debt},
    simulation::{compare_strategies, LedgerEntry, PayoffOutcome, PayoffSimulator, MAX_MONTHS},
    simulate, PayoffError, Strategy,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn first_month(entries: &[LedgerEntry], name: &str) -> LedgerEntry {
    entries
        .iter()
        .find(|entry| entry.month == 1 && entry.debt_name == name)
        .cloned()
        .expect("entry for debt in month 1")
}

#[test]
fn strategies_target_different_debts_when_orders_disagree() {
    let debts = vec![
        Debt::new("A", dec!(500), dec!(10), dec!(25)),
        Debt::new("B", dec!(3000), dec!(25), dec!(60)),
    ];

    let avalanche = simulate(&debts, dec!(300), Strategy::Avalanche, common::today()).unwrap();
    let a = first_month(&avalanche.entries, "A");
    let b = first_month(&avalanche.entries, "B");
    assert_eq!(a.payment_total, dec!(25));
    assert_eq!(b.payment_total, dec!(275));

    let snowball = simulate(&debts, dec!(300), Strategy::Snowball, common::today()).unwrap();
    let a = first_month(&snowball.entries, "A");
    let b = first_month(&snowball.entries, "B");
    assert_eq!(a.payment_total, dec!(240));
    assert_eq!(b.payment_total, dec!(60));
}

#[test]
fn ties_keep_input_order() {
    let debts = vec![
        Debt::new("First", dec!(100), dec!(12), dec!(0)),
        Debt::new("Second", dec!(100), dec!(12), dec!(0)),
    ];
    for strategy in Strategy::ALL {
        let schedule = PayoffSimulator::with_max_months(1)
            .run(&debts, dec!(150), strategy, common::today())
            .unwrap();
        let first = &schedule.entries[0];
        let second = &schedule.entries[1];
        assert_eq!(first.payment_total, dec!(100));
        assert_eq!(first.ending_balance, dec!(1.00));
        assert_eq!(second.payment_total, dec!(50));
        assert_eq!(second.ending_balance, dec!(51.00));
    }
}

#[test]
fn paid_off_debts_drop_out_of_the_ledger() {
    let debts = vec![
        Debt::new("Small", dec!(100), dec!(0), dec!(10)),
        Debt::new("Large", dec!(1000), dec!(0), dec!(10)),
    ];
    let schedule = simulate(&debts, dec!(200), Strategy::Snowball, common::today()).unwrap();
    let month_sizes: Vec<usize> = schedule.months().iter().map(|m| m.len()).collect();
    assert_eq!(month_sizes[0], 2);
    assert!(month_sizes[1..].iter().all(|&size| size == 1));
    assert_eq!(schedule.summary.months_to_payoff, 6);
    assert_eq!(schedule.summary.total_paid, dec!(1100));
    let order: Vec<&str> = schedule
        .payoff_entries()
        .iter()
        .map(|entry| entry.debt_name.as_str())
        .collect();
    assert_eq!(order, vec!["Small", "Large"]);
}

#[test]
fn insufficient_budget_reports_unreachable_payoff() {
    let debts = vec![Debt::new("Card", dec!(10000), dec!(17.5), dec!(150))];
    let schedule = simulate(&debts, dec!(150), Strategy::Snowball, common::today()).unwrap();
    assert_eq!(schedule.summary.months_to_payoff, MAX_MONTHS);
    match schedule.summary.outcome {
        PayoffOutcome::Unreachable {
            months_simulated,
            remaining_balance,
        } => {
            assert_eq!(months_simulated, MAX_MONTHS);
            assert!(remaining_balance > Decimal::ZERO);
            assert!(remaining_balance < dec!(10000));
        }
        PayoffOutcome::DebtFree => panic!("payoff should not be reachable"),
    }
    let last = schedule.entries.last().unwrap();
    assert_eq!(last.month_label, "Sep 2046");
    assert!(last.ending_balance > Decimal::ZERO);
}

#[test]
fn identical_inputs_give_identical_schedules() {
    let debts = sample_debts();
    let first = simulate(&debts, dec!(275), Strategy::Avalanche, common::today()).unwrap();
    let second = simulate(&debts, dec!(275), Strategy::Avalanche, common::today()).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn comparison_runs_both_strategies() {
    let comparison = compare_strategies(
        &PayoffSimulator::new(),
        &sample_debts(),
        dec!(300),
        common::today(),
    )
    .unwrap();
    assert_eq!(comparison.snowball.strategy, Strategy::Snowball);
    assert_eq!(comparison.avalanche.strategy, Strategy::Avalanche);
    assert!(comparison.interest_saved_by_avalanche() >= Decimal::ZERO);
}

#[test]
fn negative_budget_fails_before_simulating() {
    let err = simulate(&sample_debts(), dec!(-0.01), Strategy::Snowball, common::today())
        .unwrap_err();
    assert!(matches!(err, PayoffError::InvalidBudget(_)));
}
