//! Deterministic clock and cycle builders.
//!
//! Every relative label depends on "now", so tests pin it to
//! 2026-01-15T12:00:00Z. Noon keeps whole-day offsets away from the
//! day-boundary truncation in the duration formatter.

use chrono::{DateTime, Days, Months, NaiveDate, TimeZone, Utc};
use eoldate_types::{ReleaseCycle, TemporalValue};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

fn today() -> NaiveDate {
    fixed_now().date_naive()
}

pub fn days_after(days: u64) -> NaiveDate {
    today() + Days::new(days)
}

pub fn days_before(days: u64) -> NaiveDate {
    today() - Days::new(days)
}

pub fn months_after(months: u32) -> NaiveDate {
    today() + Months::new(months)
}

pub fn months_before(months: u32) -> NaiveDate {
    today() - Months::new(months)
}

/// Fluent builder for `ReleaseCycle` test data.
pub struct CycleBuilder {
    cycle: ReleaseCycle,
}

impl CycleBuilder {
    pub fn new(cycle: &str) -> Self {
        Self {
            cycle: ReleaseCycle {
                cycle: cycle.to_string(),
                latest: format!("{}.0", cycle),
                ..Default::default()
            },
        }
    }

    pub fn latest(mut self, latest: &str) -> Self {
        self.cycle.latest = latest.to_string();
        self
    }

    pub fn released(mut self, date: NaiveDate) -> Self {
        self.cycle.release_date = Some(date);
        self
    }

    pub fn eol(mut self, value: TemporalValue) -> Self {
        self.cycle.eol = value;
        self
    }

    pub fn eol_on(self, date: NaiveDate) -> Self {
        self.eol(TemporalValue::OnDate(date))
    }

    pub fn support(mut self, value: TemporalValue) -> Self {
        self.cycle.support = value;
        self
    }

    pub fn support_until(self, date: NaiveDate) -> Self {
        self.support(TemporalValue::OnDate(date))
    }

    pub fn lts(mut self, value: TemporalValue) -> Self {
        self.cycle.lts = value;
        self
    }

    pub fn build(self) -> ReleaseCycle {
        self.cycle
    }
}

/// Two maintained cycles (one LTS) and one that reached EOL, newest first.
pub fn sample_cycles() -> Vec<ReleaseCycle> {
    vec![
        CycleBuilder::new("3.14")
            .latest("3.14.2")
            .released(months_before(3))
            .support_until(months_after(18))
            .eol_on(months_after(24))
            .build(),
        CycleBuilder::new("3.13")
            .latest("3.13.11")
            .released(months_before(15))
            .support(TemporalValue::Flag(true))
            .eol_on(months_after(12))
            .lts(TemporalValue::Flag(true))
            .build(),
        CycleBuilder::new("2.7")
            .latest("2.7.18")
            .released(months_before(30))
            .support(TemporalValue::Flag(false))
            .eol_on(months_before(6))
            .build(),
    ]
}

/// Serialize cycles back into catalog wire JSON.
pub fn to_feed_json(cycles: &[ReleaseCycle]) -> String {
    serde_json::to_string_pretty(cycles).expect("cycles serialize")
}
