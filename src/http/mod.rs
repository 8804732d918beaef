//! Request composition and response processing
//!
//! [`Endpoint`] is the generic executor: it turns a [`Target`](crate::target::Target)
//! into a wire request, hands it to a [`Transport`], and turns the raw
//! response into either the decoded model or one typed error.
//!
//! # Flow
//!
//! 1. Resolve the URL (`base` + `path`, plus query items for query tasks)
//! 2. Merge target headers under the credential headers
//! 3. Attach the body for body-carrying tasks
//! 4. Execute with the fixed timeout; responses are never cached
//! 5. Non-2xx: error envelope -> [`Error::Api`](crate::Error::Api), anything
//!    else -> [`Error::BadServerResponse`](crate::Error::BadServerResponse)
//! 6. 2xx: decode the model; failure -> [`Error::Decode`](crate::Error::Decode)
//!
//! No retries are performed here.

mod endpoint;
mod transport;

pub use endpoint::{process_response, Endpoint};
pub use transport::{RawResponse, ReqwestTransport, Transport};
