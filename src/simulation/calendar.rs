use chrono::{Datelike, Local, Months, NaiveDate};

const LABEL_FORMAT: &str = "%b %Y";

/// Source of "today" for month labelling.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date; keeps runs reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Maps simulated month numbers (1-based) to calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    anchor: NaiveDate,
}

impl MonthCursor {
    /// Anchors month 1 on the calendar month containing `today`.
    pub fn starting(today: NaiveDate) -> Self {
        let anchor = today.with_day(1).unwrap_or(today);
        Self { anchor }
    }

    /// First day of simulated month `month`. Saturates at the anchor for month 0.
    pub fn period_start(&self, month: u32) -> NaiveDate {
        self.anchor
            .checked_add_months(Months::new(month.saturating_sub(1)))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn label(&self, month: u32) -> String {
        self.period_start(month).format(LABEL_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_month_is_current_month() {
        let cursor = MonthCursor::starting(date(2026, 10, 19));
        assert_eq!(cursor.label(1), "Oct 2026");
        assert_eq!(cursor.period_start(1), date(2026, 10, 1));
    }

    #[test]
    fn labels_roll_over_years() {
        let cursor = MonthCursor::starting(date(2026, 11, 30));
        assert_eq!(cursor.label(2), "Dec 2026");
        assert_eq!(cursor.label(3), "Jan 2027");
        assert_eq!(cursor.label(240), "Oct 2046");
    }

    #[test]
    fn fixed_clock_returns_its_date() {
        let clock = FixedClock(date(2025, 1, 31));
        assert_eq!(clock.today(), date(2025, 1, 31));
    }
}
