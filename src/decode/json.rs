//! Shared JSON body decoding

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// Characters kept on each side of the failure position
const EXCERPT_RADIUS: usize = 40;

/// Decode a response body into `M`
///
/// Date and enum fields are resolved by the model's own serde adapters, so
/// their failures surface here too. The error carries an excerpt of the body
/// around the failure position.
pub fn decode_json<M: DeserializeOwned>(body: &[u8]) -> Result<M> {
    serde_json::from_slice(body).map_err(|e| {
        let text = String::from_utf8_lossy(body);
        Error::decode(e.to_string(), excerpt(&text, e.line(), e.column()))
    })
}

/// Text around a 1-based `line` / `column` position
pub fn excerpt(text: &str, line: usize, column: usize) -> String {
    let Some(source) = text.lines().nth(line.saturating_sub(1)) else {
        return text.chars().take(EXCERPT_RADIUS * 2).collect();
    };
    let chars: Vec<char> = source.chars().collect();
    let center = column.saturating_sub(1).min(chars.len());
    let start = center.saturating_sub(EXCERPT_RADIUS);
    let end = (center + EXCERPT_RADIUS).min(chars.len());
    chars[start..end].iter().collect()
}
