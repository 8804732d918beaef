//! Request targets
//!
//! A [`Target`] declares one logical API call: where it goes, which method
//! and headers it uses, and its [`Task`] (body or query strategy). Targets are
//! plain values built per call; an `Endpoint` turns them into wire requests.

mod types;

pub use types::{JsonEncoder, LinkTarget, RequestTarget, Target, Task, DEFAULT_BASE_URL};
