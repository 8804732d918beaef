//! Generic endpoint: target in, typed model out

use super::transport::{RawResponse, Transport};
use crate::auth::{merge_headers, Credentials};
use crate::config::ClientConfig;
use crate::decode::decode_json;
use crate::error::{Error, ErrorBatch, Result};
use crate::query::{append_query, encode_query};
use crate::target::{Target, Task};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::Request;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};
use url::Url;

/// Executor for targets of type `T` whose success body decodes to `M`
///
/// Holds no per-call state: the transport and credentials are shared, and a
/// single endpoint can serve any number of concurrent requests.
pub struct Endpoint<T, M> {
    base_url: Url,
    timeout: Duration,
    transport: Arc<dyn Transport>,
    credentials: Arc<Credentials>,
    _marker: PhantomData<fn(&T) -> M>,
}

impl<T, M> Endpoint<T, M>
where
    T: Target,
    M: DeserializeOwned,
{
    /// Create an endpoint sharing `transport` and `credentials`
    pub fn new(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        credentials: Arc<Credentials>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(
            config.base_url()?,
            config.timeout(),
            transport,
            credentials,
        ))
    }

    /// Create an endpoint from already validated settings
    pub(crate) fn from_parts(
        base_url: Url,
        timeout: Duration,
        transport: Arc<dyn Transport>,
        credentials: Arc<Credentials>,
    ) -> Self {
        Self {
            base_url,
            timeout,
            transport,
            credentials,
            _marker: PhantomData,
        }
    }

    /// Base URL used for targets that do not declare one
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Compose the wire request for `target` without sending it
    pub fn build_request(&self, target: &T) -> Result<Request> {
        target.validate()?;
        let task = target.task();

        let base = target.base_url().unwrap_or_else(|| self.base_url.clone());
        let mut url = base.join(&target.path())?;
        if let Task::QueryParams(params) = &task {
            append_query(&mut url, &encode_query(params)?);
        }

        let credentials = self.credentials.headers();
        let merged = merge_headers(target.headers(), &credentials);
        let mut headers = HeaderMap::with_capacity(merged.len() + 3);
        for (name, value) in &merged {
            headers.insert(header_name(name)?, header_value(name, value)?);
        }
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        if task.is_json() && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let body = task.body()?;

        let method = target.method();
        debug!("Composed request: {} {}", method, url);

        let mut request = Request::new(method.into(), url);
        *request.timeout_mut() = Some(self.timeout);
        *request.headers_mut() = headers;
        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }
        Ok(request)
    }

    /// Turn a raw response into the model or an error
    pub fn process_response(&self, response: &RawResponse) -> Result<M> {
        process_response(response)
    }

    /// Build, send and decode
    pub async fn request(&self, target: &T) -> Result<M> {
        let request = self.build_request(target)?;
        let url = request.url().clone();
        let response = self.transport.execute(request).await?;
        process_response(&response).map_err(|e| {
            if e.is_decode() {
                error!("Failed to decode response from {}: {}", url, e);
            }
            e
        })
    }

    /// Like [`request`](Self::request), but abandons the call when `cancel` fires
    ///
    /// Returns `None` on cancellation. The in-flight request is dropped, which
    /// releases its connection; neither a model nor an error is produced.
    pub async fn request_cancellable(
        &self,
        target: &T,
        cancel: &CancellationToken,
    ) -> Option<Result<M>> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!("Request to {} cancelled", target.path());
                None
            }
            result = self.request(target) => Some(result),
        }
    }
}

/// Validate status and decode the body
///
/// Pure function of the response; produces exactly one outcome.
pub fn process_response<M: DeserializeOwned>(response: &RawResponse) -> Result<M> {
    let status = response.status.ok_or(Error::MissingStatus)?;

    if !(200..300).contains(&status) {
        return Err(match serde_json::from_slice::<ErrorBatch>(&response.body) {
            Ok(errors) => {
                warn!("API error (HTTP {}): {}", status, errors);
                Error::Api { status, errors }
            }
            Err(_) => {
                warn!("Bad server response (HTTP {})", status);
                Error::BadServerResponse { status }
            }
        });
    }

    decode_json(&response.body)
}

fn header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|e| Error::InvalidHeader {
        name: name.to_string(),
        message: e.to_string(),
    })
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader {
        name: name.to_string(),
        message: e.to_string(),
    })
}

impl<T, M> Clone for Endpoint<T, M> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            transport: Arc::clone(&self.transport),
            credentials: Arc::clone(&self.credentials),
            _marker: PhantomData,
        }
    }
}

impl<T, M> fmt::Debug for Endpoint<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
