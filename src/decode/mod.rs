//! Response decoding
//!
//! The pieces every model decoder shares:
//!
//! - [`decode_date`]: two-branch date parsing for the API's mixed timestamp formats
//! - [`CaseInsensitive`] / [`Classified`]: tolerant enum resolution with a
//!   sentinel for absent fields and a hard error for unrecognized values
//! - [`decode_json`]: body decoding that keeps the offending fragment on failure

mod date;
mod enums;
mod json;

pub use date::{decode_date, format_date, serde_date};
pub use enums::{classified, strict, variant_names, CaseInsensitive, Classified};
pub use json::{decode_json, excerpt};
