use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::{
    domain::{monthly_rate, round_money, Debt},
    errors::{PayoffError, Result},
};

use super::{
    calendar::{Clock, MonthCursor},
    strategy::Strategy,
    types::{LedgerEntry, PayoffOutcome, PayoffSchedule, PayoffSummary},
};

/// Twenty years of monthly payments.
pub const MAX_MONTHS: u32 = 240;

/// Mutable per-debt state owned by a single run, addressed by input index.
#[derive(Debug)]
struct DebtSlot<'a> {
    index: usize,
    debt: &'a Debt,
    monthly_rate: Decimal,
    balance: Decimal,
}

impl DebtSlot<'_> {
    fn is_active(&self) -> bool {
        self.balance > Decimal::ZERO
    }
}

/// Iterative payoff engine. Each run owns its state; the simulator itself is immutable.
#[derive(Debug, Clone, Copy)]
pub struct PayoffSimulator {
    max_months: u32,
}

impl Default for PayoffSimulator {
    fn default() -> Self {
        Self {
            max_months: MAX_MONTHS,
        }
    }
}

impl PayoffSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_months(max_months: u32) -> Self {
        Self { max_months }
    }

    /// Runs with "today" taken from `clock`.
    pub fn run_with_clock(
        &self,
        debts: &[Debt],
        monthly_budget: Decimal,
        strategy: Strategy,
        clock: &dyn Clock,
    ) -> Result<PayoffSchedule> {
        self.run(debts, monthly_budget, strategy, clock.today())
    }

    pub fn run(
        &self,
        debts: &[Debt],
        monthly_budget: Decimal,
        strategy: Strategy,
        today: NaiveDate,
    ) -> Result<PayoffSchedule> {
        if monthly_budget < Decimal::ZERO {
            return Err(PayoffError::InvalidBudget(monthly_budget));
        }

        let mut slots = build_slots(debts);
        let cursor = MonthCursor::starting(today);
        let mut entries = Vec::new();
        let mut total_interest = Decimal::ZERO;
        let mut total_paid = Decimal::ZERO;
        let mut month = 0u32;

        while slots.iter().any(DebtSlot::is_active) && month < self.max_months {
            month += 1;
            let label = cursor.label(month);
            let active: Vec<usize> = (0..slots.len())
                .filter(|&slot| slots[slot].is_active())
                .collect();
            let interest: Vec<Decimal> = slots
                .iter()
                .map(|slot| slot.balance * slot.monthly_rate)
                .collect();
            let allocations = allocate(&slots, &active, &interest, monthly_budget, strategy);

            for &slot_idx in &active {
                let slot = &mut slots[slot_idx];
                let settled = settle(slot.balance, interest[slot_idx], allocations[slot_idx]);
                total_interest += settled.interest.min(settled.payment);
                total_paid += settled.payment;
                entries.push(LedgerEntry {
                    month,
                    month_label: label.clone(),
                    debt_index: slot.index,
                    debt_name: slot.debt.name.clone(),
                    starting_balance: round_money(slot.balance),
                    interest_accrued: round_money(settled.interest),
                    principal_applied: round_money(settled.principal),
                    payment_total: round_money(settled.payment),
                    ending_balance: round_money(settled.ending_balance),
                });
                slot.balance = settled.ending_balance;
            }
            debug!(month, active = active.len(), "simulated month");
        }

        let remaining: Decimal = slots.iter().map(|slot| slot.balance).sum();
        let outcome = if remaining > Decimal::ZERO {
            warn!(
                months = month,
                remaining = %round_money(remaining),
                "payoff not reached before the month cap"
            );
            PayoffOutcome::Unreachable {
                months_simulated: month,
                remaining_balance: round_money(remaining),
            }
        } else {
            PayoffOutcome::DebtFree
        };
        info!(
            %strategy,
            months = month,
            interest = %round_money(total_interest),
            "payoff simulation finished"
        );

        Ok(PayoffSchedule {
            strategy,
            monthly_budget,
            entries,
            summary: PayoffSummary {
                months_to_payoff: month,
                total_interest_paid: round_money(total_interest),
                total_paid: round_money(total_paid),
                outcome,
            },
        })
    }
}

/// Runs the payoff simulation with the default twenty-year cap.
pub fn simulate(
    debts: &[Debt],
    monthly_budget: Decimal,
    strategy: Strategy,
    today: NaiveDate,
) -> Result<PayoffSchedule> {
    PayoffSimulator::default().run(debts, monthly_budget, strategy, today)
}

fn build_slots(debts: &[Debt]) -> Vec<DebtSlot<'_>> {
    debts
        .iter()
        .enumerate()
        .filter(|(index, debt)| {
            let usable = debt.starting_balance > Decimal::ZERO
                && debt.annual_rate_percent >= Decimal::ZERO
                && debt.minimum_payment >= Decimal::ZERO;
            if !usable {
                debug!(index, name = %debt.name, "excluding inactive debt");
            }
            usable
        })
        .map(|(index, debt)| DebtSlot {
            index,
            debt,
            monthly_rate: monthly_rate(debt.annual_rate_percent),
            balance: debt.starting_balance,
        })
        .collect()
}

/// Splits the budget across active slots: minimums in input order, then the
/// leftover cascades down the strategy's priority order. Each target takes at
/// most its current balance; `settle` caps anything past balance + interest.
fn allocate(
    slots: &[DebtSlot<'_>],
    active: &[usize],
    interest: &[Decimal],
    monthly_budget: Decimal,
    strategy: Strategy,
) -> Vec<Decimal> {
    let mut allocations = vec![Decimal::ZERO; slots.len()];
    let mut remaining = monthly_budget;

    for &slot_idx in active {
        let slot = &slots[slot_idx];
        let due = slot.debt.minimum_payment.min(slot.balance);
        let paid = due.min(remaining);
        allocations[slot_idx] = paid;
        remaining -= paid;
    }

    if remaining <= Decimal::ZERO {
        return allocations;
    }

    let mut order = active.to_vec();
    order.sort_by_key(|&slot_idx| {
        let slot = &slots[slot_idx];
        strategy.priority_key(slot.balance, slot.debt.annual_rate_percent)
    });

    for slot_idx in order {
        if remaining <= Decimal::ZERO {
            break;
        }
        let extra = slots[slot_idx].balance.min(remaining);
        allocations[slot_idx] += extra;
        remaining -= extra;
    }

    allocations
}

struct Settlement {
    interest: Decimal,
    payment: Decimal,
    principal: Decimal,
    ending_balance: Decimal,
}

fn settle(balance: Decimal, interest: Decimal, allocated: Decimal) -> Settlement {
    let payoff = balance + interest;
    if allocated >= payoff {
        return Settlement {
            interest,
            payment: payoff,
            principal: balance,
            ending_balance: Decimal::ZERO,
        };
    }
    let principal = (allocated - interest).max(Decimal::ZERO);
    Settlement {
        interest,
        payment: allocated,
        principal,
        ending_balance: (balance - principal).max(Decimal::ZERO),
    }
}
