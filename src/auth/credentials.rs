//! Credential store and header merging

use crate::types::Headers;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Header carrying the AMC vendor key
pub const VENDOR_KEY_HEADER: &str = "X-AMC-Vendor-Key";

/// Authorization headers shared by every request of a client
///
/// Writes replace the whole header map at once, so a concurrent reader sees
/// either the old map or the new one, never a mix.
#[derive(Default)]
pub struct Credentials {
    headers: RwLock<Arc<Headers>>,
}

impl Credentials {
    /// Empty credential store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding a vendor key
    pub fn with_vendor_key(key: impl Into<String>) -> Self {
        let credentials = Self::new();
        credentials.set_vendor_key(key);
        credentials
    }

    /// Replace the stored headers with a single vendor key header
    pub fn set_vendor_key(&self, key: impl Into<String>) {
        let mut headers = Headers::new();
        headers.insert(VENDOR_KEY_HEADER.to_string(), key.into());
        self.set_headers(headers);
    }

    /// Replace the stored headers
    pub fn set_headers(&self, headers: Headers) {
        let mut slot = self.headers.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Arc::new(headers);
    }

    /// Remove all stored headers
    pub fn clear(&self) {
        self.set_headers(Headers::new());
    }

    /// Snapshot of the current headers
    pub fn headers(&self) -> Arc<Headers> {
        Arc::clone(&self.headers.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Whether a vendor key is configured
    pub fn has_vendor_key(&self) -> bool {
        self.headers().contains_key(VENDOR_KEY_HEADER)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self.headers();
        let mut names: Vec<&String> = headers.keys().collect();
        names.sort();
        f.debug_struct("Credentials")
            .field("headers", &names)
            .finish_non_exhaustive()
    }
}

/// Merge target headers with credential headers
///
/// Credential headers win on collision. Header names compare
/// case-insensitively, so `x-amc-vendor-key` on a target cannot shadow the
/// configured key.
pub fn merge_headers(target: Option<Headers>, credentials: &Headers) -> Headers {
    let mut merged = target.unwrap_or_default();
    merged.retain(|name, _| {
        !credentials
            .keys()
            .any(|cred| cred.eq_ignore_ascii_case(name))
    });
    merged.extend(credentials.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}
