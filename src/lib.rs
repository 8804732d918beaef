// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # AMC API
//!
//! A typed async client for the AMC Theatres REST API.
//!
//! ## Features
//!
//! - **Declarative targets**: each API call is a value describing path,
//!   method, headers and a body-or-query [`Task`]
//! - **Generic endpoint**: one [`Endpoint`] turns any target into a wire
//!   request and decodes the response into a typed model
//! - **Service errors surfaced**: non-2xx responses become [`Error::Api`]
//!   carrying the service's own error envelope
//! - **Tolerant decoding**: mixed ISO-8601 timestamp formats and
//!   case-insensitive classification values
//! - **Cancellable**: every request can be abandoned through a
//!   `CancellationToken`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use amc_api::{AmcClient, ClientConfig, TheatreId};
//!
//! #[tokio::main]
//! async fn main() -> amc_api::Result<()> {
//!     let client = AmcClient::new(ClientConfig::builder().vendor_key("...").build())?;
//!
//!     let theatre = client.fetch_theatre(TheatreId(610)).await?;
//!     let showtimes = client.fetch_all_showtimes(theatre.id, None).await?;
//!
//!     let mut page = client.fetch_now_playing_movies(1, 10).await?;
//!     while let Some(next) = client.fetch_next(&page).await {
//!         page = next?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         AmcClient                            │
//! │  fetch_movie()  fetch_theatre()  fetch_showtimes()  next()   │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │
//! ┌───────────┬──────────────────┴─────┬───────────┬────────────┐
//! │ Resources │       Endpoint         │   Auth    │   Decode   │
//! ├───────────┼────────────────────────┼───────────┼────────────┤
//! │ Movies    │ build_request          │ Vendor key│ Dates      │
//! │ Theatres  │ Transport (reqwest)    │ Header    │ Enums      │
//! │ Showtimes │ process_response       │ merge     │ Models     │
//! └───────────┴────────────────────────┴───────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types and the service error envelope
pub mod error;

/// Common types and type aliases
pub mod types;

/// Query string encoding
pub mod query;

/// Request targets and tasks
pub mod target;

/// Vendor key credentials
pub mod auth;

/// Endpoint and transport
pub mod http;

/// Dates, enums and JSON body decoding
pub mod decode;

/// Response models
pub mod models;

/// AMC resource path tables
pub mod resources;

/// Client configuration
pub mod config;

/// High-level client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorBatch, ErrorDetail, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::Credentials;
pub use client::AmcClient;
pub use config::ClientConfig;
pub use http::{Endpoint, RawResponse, ReqwestTransport, Transport};
pub use models::{Movie, MovieId, Page, Showtime, ShowtimeId, Theatre, TheatreId};
pub use query::{QueryParams, QueryValue};
pub use target::{RequestTarget, Target, Task};
pub use tokio_util::sync::CancellationToken;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
