//! Target and task types

use crate::error::{Error, Result};
use crate::query::QueryParams;
use crate::types::{Headers, Method};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.amctheatres.com";

/// JSON encoder settings for request bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonEncoder {
    /// Emit indented output
    pub pretty: bool,
}

impl JsonEncoder {
    /// Compact encoder (the default)
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented encoder
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Encode a value to bytes
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        encoded.map_err(|e| Error::encode(e.to_string()))
    }
}

/// How a request carries its input
///
/// Exactly one strategy is active, so a request carries either a body or
/// query parameters, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// No body, no query
    Plain,
    /// Body sent verbatim
    RawBytes(Bytes),
    /// Serializable body encoded with the default encoder
    Json(Value),
    /// Serializable body encoded with a custom encoder
    JsonWith(Value, JsonEncoder),
    /// Parameters appended to the URL query string
    QueryParams(QueryParams),
}

impl Task {
    /// Capture a serializable body; fails if the value cannot be represented as JSON
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::Json(to_json_value(value)?))
    }

    /// Capture a serializable body with a custom encoder
    pub fn json_with<T: Serialize + ?Sized>(value: &T, encoder: JsonEncoder) -> Result<Self> {
        Ok(Self::JsonWith(to_json_value(value)?, encoder))
    }

    /// Query parameter task
    pub fn query(params: QueryParams) -> Self {
        Self::QueryParams(params)
    }

    /// Encoded body bytes, or `None` for body-less tasks
    pub fn body(&self) -> Result<Option<Bytes>> {
        match self {
            Task::Plain | Task::QueryParams(_) => Ok(None),
            Task::RawBytes(bytes) => Ok(Some(bytes.clone())),
            Task::Json(value) => JsonEncoder::default().encode(value).map(|b| Some(b.into())),
            Task::JsonWith(value, encoder) => encoder.encode(value).map(|b| Some(b.into())),
        }
    }

    /// Whether the body is JSON (and needs a content type)
    pub fn is_json(&self) -> bool {
        matches!(self, Task::Json(_) | Task::JsonWith(..))
    }

    /// Query parameters, if this is a query task
    pub fn query_params(&self) -> Option<&QueryParams> {
        match self {
            Task::QueryParams(params) => Some(params),
            _ => None,
        }
    }
}

fn to_json_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| Error::encode(e.to_string()))
}

/// Declarative description of one API call
pub trait Target: Send + Sync {
    /// Base URL; `None` uses the endpoint's configured base
    fn base_url(&self) -> Option<Url> {
        None
    }

    /// Path resolved against the base URL (absolute URLs replace it)
    fn path(&self) -> String;

    /// Target-specific headers; credentials override these on collision
    fn headers(&self) -> Option<Headers> {
        None
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn task(&self) -> Task;

    /// Reject a target that cannot be turned into a request
    ///
    /// Called before any URL composition or I/O.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// A free-form target, for calls outside the built-in resource tables
#[derive(Debug, Clone)]
pub struct RequestTarget {
    pub base_url: Option<Url>,
    pub path: String,
    pub headers: Option<Headers>,
    pub method: Method,
    pub task: Task,
}

impl RequestTarget {
    /// Plain GET of `path`
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            base_url: None,
            path: path.into(),
            headers: None,
            method: Method::GET,
            task: Task::Plain,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_task(mut self, task: Task) -> Self {
        self.task = task;
        self
    }
}

impl Target for RequestTarget {
    fn base_url(&self) -> Option<Url> {
        self.base_url.clone()
    }

    fn path(&self) -> String {
        self.path.clone()
    }

    fn headers(&self) -> Option<Headers> {
        self.headers.clone()
    }

    fn method(&self) -> Method {
        self.method
    }

    fn task(&self) -> Task {
        self.task.clone()
    }
}

/// Target following a HAL link (`_links.next.href`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    href: String,
}

impl LinkTarget {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

impl Target for LinkTarget {
    fn path(&self) -> String {
        self.href.clone()
    }

    fn task(&self) -> Task {
        Task::Plain
    }
}
