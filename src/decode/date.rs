//! Date decoding
//!
//! The API is not fully ISO-8601 compliant. Timestamps arrive either as
//! extended ISO-8601 (`2021-08-29T14:55:00.327Z`) or without any zone or
//! fraction (`2021-08-29T15:00:00`), which is UTC by convention.
//!
//! Every input is classified into exactly one branch:
//!
//! - ends with `Z` or contains `.` -> extended ISO-8601, fractional seconds
//!   optional, offset optional (absent means UTC)
//! - anything else -> `%Y-%m-%dT%H:%M:%S` in UTC

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const FALLBACK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const FRACTIONAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Decode an API timestamp into a UTC instant
pub fn decode_date(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = if raw.ends_with('Z') || raw.contains('.') {
        parse_extended(raw)
    } else {
        parse_fallback(raw)
    };
    parsed.ok_or_else(|| Error::decode(format!("'{raw}' is not a valid date format"), raw))
}

fn parse_extended(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, FRACTIONAL_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn parse_fallback(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, FALLBACK_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Format a calendar date the way path and query segments expect (`YYYY-MM-DD`)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Serde adapter routing date fields through [`decode_date`]
///
/// ```rust,ignore
/// #[serde(with = "serde_date")]
/// release_date_utc: DateTime<Utc>,
///
/// #[serde(default, with = "serde_date::option")]
/// earliest_showing_utc: Option<DateTime<Utc>>,
/// ```
pub mod serde_date {
    use super::decode_date;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        decode_date(&raw).map_err(de::Error::custom)
    }

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub mod option {
        use super::decode_date;
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| decode_date(&raw).map_err(de::Error::custom))
                .transpose()
        }

        pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}
