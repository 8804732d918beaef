//! Query string encoding
//!
//! Turns a key/value bag of scalar values into URL query items.
//!
//! # Rules
//!
//! - Booleans render as `true` / `false`
//! - Integers and floats render in canonical decimal form (`42`, `3.1415926`, `2.5`)
//! - Strings are used verbatim; percent-encoding happens when the items are
//!   written into a URL
//! - Item order follows insertion order; callers needing a stable order use
//!   [`QueryParams::sorted`]

mod encoder;
mod types;

pub use encoder::{append_query, encode_path_segment, encode_query, to_query_string};
pub use types::{QueryParams, QueryValue};
