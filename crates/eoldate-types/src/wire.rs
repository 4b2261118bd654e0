//! Lenient serde helpers for catalog fields.
//!
//! None of these ever return an error for a well-formed JSON value: type
//! mismatches and garbled strings are absorbed into a fallback. An explicit
//! `null` on a lifecycle field reads as `false`, an absent one as unknown.

use crate::temporal::{DegradePolicy, TemporalValue, parse_date};
use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum WireValue {
    Null,
    Bool(bool),
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
    Other(IgnoredAny),
}

fn decode_temporal<'de, D>(
    deserializer: D,
    policy: DegradePolicy,
) -> Result<TemporalValue, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match WireValue::deserialize(deserializer)? {
        WireValue::Null => TemporalValue::Flag(false),
        WireValue::Bool(value) => TemporalValue::Flag(value),
        WireValue::Text(raw) => TemporalValue::parse(&raw, policy),
        WireValue::Other(_) => TemporalValue::Unknown,
    })
}

/// `eol` and `support`: malformed strings degrade to `Flag(true)`.
pub fn eol_value<'de, D>(deserializer: D) -> Result<TemporalValue, D::Error>
where
    D: Deserializer<'de>,
{
    decode_temporal(deserializer, DegradePolicy::Ended)
}

/// `lts`: malformed strings degrade to `Flag(false)`.
pub fn lts_value<'de, D>(deserializer: D) -> Result<TemporalValue, D::Error>
where
    D: Deserializer<'de>,
{
    decode_temporal(deserializer, DegradePolicy::NotLts)
}

/// Plain dates (`releaseDate`, `latestReleaseDate`); anything but a valid
/// `YYYY-MM-DD` string is `None`.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match WireValue::deserialize(deserializer)? {
        WireValue::Text(raw) => parse_date(&raw),
        WireValue::Null | WireValue::Bool(_) | WireValue::Other(_) => None,
    })
}

/// Version-ish identifiers; some products publish `"cycle": 8` instead of `"8"`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Integer(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
        StringOrNumber::Other(_) => String::new(),
    })
}
