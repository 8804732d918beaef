//! Query item encoding and URL assembly

use super::types::QueryParams;
use crate::error::Result;
use url::form_urlencoded;
use url::Url;

/// Encode parameters into `(key, value)` string pairs in insertion order
pub fn encode_query(params: &QueryParams) -> Result<Vec<(String, String)>> {
    params
        .iter()
        .map(|(key, value)| Ok((key.to_string(), value.render(key)?)))
        .collect()
}

/// Percent-encode query items into `k=v&k=v` form
///
/// Spaces become `%20` rather than the form-encoding `+`. A literal `+` is
/// always emitted as `%2B`, so the substitution is unambiguous.
pub fn to_query_string(items: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in items {
        serializer.append_pair(key, value);
    }
    serializer.finish().replace('+', "%20")
}

/// Percent-encode a value as one path segment
///
/// `/`, `?`, `#` and `%` are always escaped, so the result never adds
/// segments, a query or a fragment to the URL it is joined into.
pub fn encode_path_segment(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Append query items to a URL, keeping any query it already carries
pub fn append_query(url: &mut Url, items: &[(String, String)]) {
    if items.is_empty() {
        return;
    }
    let encoded = to_query_string(items);
    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
        _ => encoded,
    };
    url.set_query(Some(&query));
}
