use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Serialize, Serializer};

/// Calendar format used by the catalog and by every machine-readable output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A lifecycle field that the catalog encodes either as a flag or as a date.
///
/// `OnDate` carries the day after which the flag becomes true (EOL reached,
/// support lapsed, LTS started). `Unknown` is the "no data" state: it renders
/// as empty text and is neither EOL nor LTS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemporalValue {
    Flag(bool),
    OnDate(NaiveDate),
    #[default]
    Unknown,
}

/// What a malformed (non-empty, non-date) string decodes to.
///
/// The feed is semi-trusted: a garbled EOL or support date is read as
/// "already ended", while a garbled LTS date is read as "not LTS".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradePolicy {
    Ended,
    NotLts,
}

impl DegradePolicy {
    pub fn fallback(self) -> bool {
        match self {
            DegradePolicy::Ended => true,
            DegradePolicy::NotLts => false,
        }
    }
}

impl TemporalValue {
    /// Decode a string wire value. Never fails.
    pub fn parse(raw: &str, policy: DegradePolicy) -> Self {
        if raw.is_empty() {
            return TemporalValue::Unknown;
        }

        match parse_date(raw) {
            Some(date) => TemporalValue::OnDate(date),
            None => {
                tracing::debug!(raw, ?policy, "unparseable date, degrading to flag");
                TemporalValue::Flag(policy.fallback())
            }
        }
    }

    /// EOL/support reading: flags are taken as-is, dates are compared
    /// strictly against `now`.
    ///
    /// `now` should be sampled once per render pass and reused for every
    /// field of every row.
    pub fn is_eol(&self, now: DateTime<Utc>) -> bool {
        match self {
            TemporalValue::Flag(value) => *value,
            TemporalValue::OnDate(date) => now > start_of_day(*date),
            TemporalValue::Unknown => false,
        }
    }

    /// LTS reading: any start date means LTS, past or future.
    pub fn is_lts(&self) -> bool {
        match self {
            TemporalValue::Flag(value) => *value,
            TemporalValue::OnDate(_) => true,
            TemporalValue::Unknown => false,
        }
    }

    /// Machine-readable form: `"true"`/`"false"` for flags, ISO date for
    /// dates, empty when unknown.
    pub fn raw_value(&self) -> String {
        match self {
            TemporalValue::Flag(value) => value.to_string(),
            TemporalValue::OnDate(date) => format_date(*date),
            TemporalValue::Unknown => String::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TemporalValue::Unknown)
    }
}

// Written back in wire shape. `Unknown` has no wire form (null decodes as
// `Flag(false)`), so containers skip it instead of serializing it.
impl Serialize for TemporalValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TemporalValue::Flag(value) => serializer.serialize_bool(*value),
            TemporalValue::OnDate(date) => serializer.serialize_str(&format_date(*date)),
            TemporalValue::Unknown => serializer.serialize_none(),
        }
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Midnight UTC of `date`; the instant all relative arithmetic starts from.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
