//! Query parameter types

use crate::error::{Error, Result};
use serde_json::Value;

/// A scalar value accepted in a query string
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl QueryValue {
    /// Convert a JSON value, rejecting anything that is not a scalar
    pub fn from_json(key: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Int(i))
                } else if n.is_u64() {
                    Err(unsupported(key, &format!("integer {n} out of range")))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::Float(f))
                } else {
                    Err(unsupported(key, "number out of range"))
                }
            }
            Value::String(s) => Ok(Self::Str(s.clone())),
            Value::Null => Err(unsupported(key, "null")),
            Value::Array(_) => Err(unsupported(key, "array")),
            Value::Object(_) => Err(unsupported(key, "object")),
        }
    }

    /// Render the value as it appears in the query string (before percent-encoding)
    pub fn render(&self, key: &str) -> Result<String> {
        match self {
            Self::Bool(b) => Ok(b.to_string()),
            Self::Int(i) => Ok(i.to_string()),
            Self::Float(f) if f.is_finite() => Ok(f.to_string()),
            Self::Float(f) => Err(unsupported(key, &format!("non-finite float {f}"))),
            Self::Str(s) => Ok(s.clone()),
        }
    }
}

fn unsupported(key: &str, kind: &str) -> Error {
    Error::UnsupportedQueryValue {
        key: key.to_string(),
        kind: kind.to_string(),
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for QueryValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for QueryValue {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f32> for QueryValue {
    fn from(v: f32) -> Self {
        Self::Float(v.into())
    }
}

impl From<f64> for QueryValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// Insertion-ordered query parameter bag
///
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    items: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.items.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.items.push((key, value)),
        }
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Build from a JSON object; non-scalar values are rejected
    pub fn from_json_map(map: &serde_json::Map<String, Value>) -> Result<Self> {
        let mut params = Self::new();
        for (key, value) in map {
            params.insert(key.clone(), QueryValue::from_json(key, value)?);
        }
        Ok(params)
    }

    /// Look up a parameter
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.items.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// A copy ordered by key
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut items = self.items.clone();
        items.sort_by(|a, b| a.0.cmp(&b.0));
        Self { items }
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
