use crate::presentation::formatters::format_duration;
use crate::presentation::view_models::RelativeLabel;
use chrono::{DateTime, NaiveDate, Utc};
use eoldate_types::{TemporalValue, format_date, start_of_day};

/// Projects dates and lifecycle values onto `{relative, absolute}` labels
/// against a single sampled `now`.
#[derive(Debug, Clone, Copy)]
pub struct RelativeProjector {
    now: DateTime<Utc>,
}

impl RelativeProjector {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// "{span} ago" for a release date; empty when unknown.
    pub fn release(&self, date: Option<NaiveDate>) -> RelativeLabel {
        let Some(date) = date else {
            return RelativeLabel::empty();
        };

        let elapsed = self.now - start_of_day(date);
        RelativeLabel::new(
            format!("{} ago", format_duration(elapsed)),
            format_date(date),
        )
    }

    /// Support flags: `true` is "Active", `false` means no information ("-").
    pub fn support(&self, value: &TemporalValue) -> RelativeLabel {
        match value {
            TemporalValue::Flag(true) => RelativeLabel::flag("Active"),
            TemporalValue::Flag(false) => RelativeLabel::flag("-"),
            TemporalValue::OnDate(date) => self.around(*date),
            TemporalValue::Unknown => RelativeLabel::empty(),
        }
    }

    /// EOL flags: `true` is "Ended", `false` is "Active".
    pub fn eol(&self, value: &TemporalValue) -> RelativeLabel {
        match value {
            TemporalValue::Flag(true) => RelativeLabel::flag("Ended"),
            TemporalValue::Flag(false) => RelativeLabel::flag("Active"),
            TemporalValue::OnDate(date) => self.around(*date),
            TemporalValue::Unknown => RelativeLabel::empty(),
        }
    }

    fn around(&self, date: NaiveDate) -> RelativeLabel {
        let remaining = start_of_day(date) - self.now;
        let relative = if remaining > chrono::Duration::zero() {
            format!("in {}", format_duration(remaining))
        } else {
            format!("{} ago", format_duration(-remaining))
        };
        RelativeLabel::new(relative, format_date(date))
    }
}
