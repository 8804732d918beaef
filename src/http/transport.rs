//! Transport abstraction
//!
//! The endpoint only needs "send this request, give me status, headers and
//! body". [`ReqwestTransport`] is the production implementation; tests and
//! embedders can supply their own.

use crate::config::ClientConfig;
use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Client, Request};
use tracing::debug;

/// A response as received from the wire
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    /// HTTP status; `None` when the transport could not determine one
    pub status: Option<u16>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RawResponse {
    /// Response with a status and body
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status: Some(status),
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Executes HTTP requests
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and collect the full response
    async fn execute(&self, request: Request) -> Result<RawResponse>;
}

/// Transport backed by a shared `reqwest` connection pool
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the configured timeout and user agent
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<RawResponse> {
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.client.execute(request).await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(RawResponse {
            status: Some(status),
            headers,
            body,
        })
    }
}
