use crate::temporal::TemporalValue;
use crate::wire;
use crate::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One release line of a product as published by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseCycle {
    #[serde(default, deserialize_with = "wire::string_or_number")]
    pub cycle: String,

    #[serde(default, deserialize_with = "wire::string_or_number")]
    pub latest: String,

    #[serde(default, deserialize_with = "wire::lenient_date")]
    pub release_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "wire::lenient_date")]
    pub latest_release_date: Option<NaiveDate>,

    #[serde(
        default,
        deserialize_with = "wire::eol_value",
        skip_serializing_if = "TemporalValue::is_unknown"
    )]
    pub eol: TemporalValue,

    #[serde(
        default,
        deserialize_with = "wire::eol_value",
        skip_serializing_if = "TemporalValue::is_unknown"
    )]
    pub support: TemporalValue,

    #[serde(
        default,
        deserialize_with = "wire::lts_value",
        skip_serializing_if = "TemporalValue::is_unknown"
    )]
    pub lts: TemporalValue,
}

impl ReleaseCycle {
    pub fn is_eol(&self, now: DateTime<Utc>) -> bool {
        self.eol.is_eol(now)
    }

    pub fn is_lts(&self) -> bool {
        self.lts.is_lts()
    }
}

/// Active/EOL tally over the full, unfiltered cycle list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub active: usize,
    pub eol: usize,
}

impl CycleSummary {
    pub fn tally(cycles: &[ReleaseCycle], now: DateTime<Utc>) -> Self {
        let eol = cycles.iter().filter(|c| c.is_eol(now)).count();
        Self {
            active: cycles.len() - eol,
            eol,
        }
    }
}

/// Decode a catalog product document (a JSON array of cycles).
///
/// Only a malformed envelope is an error; individual fields never fail.
pub fn parse_cycles(json: &str) -> Result<Vec<ReleaseCycle>> {
    Ok(serde_json::from_str(json)?)
}
