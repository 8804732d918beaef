//! Case-insensitive enum resolution
//!
//! The API does not use consistent case for classification values
//! (`"Comedy"`, `"comedy"`, `"COMEDY"`). Resolution scans the variants in
//! declaration order comparing canonical names case-insensitively, then falls
//! back to exact `FromStr` construction, which also honours any extra
//! `#[strum(serialize = "...")]` aliases.
//!
//! Absent and unrecognized values are treated differently:
//!
//! - field missing (or `null`) -> the enum's [`Classified::SENTINEL`]
//! - field present, value unknown -> decode error naming the value and the
//!   accepted variants

use std::str::FromStr;
use strum::IntoEnumIterator;

/// Enums resolvable from a raw string regardless of case
pub trait CaseInsensitive: Sized {
    /// Resolve `raw` to a variant, or `None` if nothing matches
    fn resolve(raw: &str) -> Option<Self>;
}

impl<E> CaseInsensitive for E
where
    E: IntoEnumIterator + AsRef<str> + FromStr,
{
    fn resolve(raw: &str) -> Option<Self> {
        E::iter()
            .find(|variant| eq_ignore_case(variant.as_ref(), raw))
            .or_else(|| raw.parse().ok())
    }
}

/// Enums with a designated variant for absent classification fields
pub trait Classified: CaseInsensitive {
    const SENTINEL: Self;
}

/// Canonical names of all variants, in declaration order
pub fn variant_names<E>() -> Vec<String>
where
    E: IntoEnumIterator + AsRef<str>,
{
    E::iter().map(|v| v.as_ref().to_string()).collect()
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn short_type_name<E>() -> &'static str {
    let full = std::any::type_name::<E>();
    full.rsplit("::").next().unwrap_or(full)
}

pub(crate) fn unrecognized<E>(raw: &str) -> String
where
    E: IntoEnumIterator + AsRef<str>,
{
    format!(
        "'{raw}' is not a valid {} (expected one of: {})",
        short_type_name::<E>(),
        variant_names::<E>().join(", ")
    )
}

/// Serde adapter for classification fields with a sentinel
///
/// ```rust,ignore
/// #[serde(default = "classified::sentinel", with = "classified")]
/// genre: Genre,
/// ```
pub mod classified {
    use super::{unrecognized, Classified};
    use serde::{de, Deserialize, Deserializer};
    use strum::IntoEnumIterator;

    pub use super::strict::serialize;

    /// Value used when the field is absent from the payload
    pub fn sentinel<E: Classified>() -> E {
        E::SENTINEL
    }

    pub fn deserialize<'de, D, E>(deserializer: D) -> Result<E, D::Error>
    where
        D: Deserializer<'de>,
        E: Classified + IntoEnumIterator + AsRef<str>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(E::SENTINEL),
            Some(raw) => E::resolve(&raw).ok_or_else(|| de::Error::custom(unrecognized::<E>(&raw))),
        }
    }
}

/// Serde adapter for enums without a sentinel; every value must resolve
pub mod strict {
    use super::{unrecognized, CaseInsensitive};
    use serde::ser::SerializeSeq;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use strum::IntoEnumIterator;

    /// Write the variant's canonical name
    pub fn serialize<S, E>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        E: AsRef<str>,
    {
        serializer.serialize_str(value.as_ref())
    }

    pub fn serialize_vec<S, E>(values: &[E], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        E: AsRef<str>,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(value.as_ref())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D, E>(deserializer: D) -> Result<E, D::Error>
    where
        D: Deserializer<'de>,
        E: CaseInsensitive + IntoEnumIterator + AsRef<str>,
    {
        let raw = String::deserialize(deserializer)?;
        E::resolve(&raw).ok_or_else(|| de::Error::custom(unrecognized::<E>(&raw)))
    }

    /// Sequence form, for fields holding a list of values
    pub fn deserialize_vec<'de, D, E>(deserializer: D) -> Result<Vec<E>, D::Error>
    where
        D: Deserializer<'de>,
        E: CaseInsensitive + IntoEnumIterator + AsRef<str>,
    {
        Vec::<String>::deserialize(deserializer)?
            .into_iter()
            .map(|raw| E::resolve(&raw).ok_or_else(|| de::Error::custom(unrecognized::<E>(&raw))))
            .collect()
    }
}
