//! Credential supply
//!
//! The AMC API authorizes calls with a vendor key header. [`Credentials`]
//! holds the extra headers sent with every request; endpoints read a snapshot
//! once per request and merge it over the target's own headers.

mod credentials;

pub use credentials::{merge_headers, Credentials, VENDOR_KEY_HEADER};
