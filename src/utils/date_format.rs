//! Serde helpers for the app's display dates ("Sep 5, 2025").

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const DISPLAY_FORMAT: &str = "%b %-d, %Y";
const PARSE_FORMAT: &str = "%b %d, %Y";

pub fn to_display(date: &NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

pub fn parse_display(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), PARSE_FORMAT)
        .map_err(|e| format!("Invalid date '{}': {}", s, e))
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_display(date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_display(&s).map_err(serde::de::Error::custom)
}

/// Same format for optional fields (update requests).
pub mod option {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_some(&super::to_display(d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| super::parse_display(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Fixture helper; only called with literal dates.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
