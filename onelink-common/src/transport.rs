//! The HTTP collaborator the client talks through.
//!
//! The client never touches the network directly. It hands a url and the form
//! fields to an [`HttpTransport`] and gets a [`RawResponse`] back. Retries,
//! timeouts, TLS and connection pooling all live on this side of the seam.

use crate::Error;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use tracing::debug;
use url::Url;

/// One HTTP exchange as seen by the client.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status_code: u16,
    /// Transport-level success, independent of how the client reads the status.
    pub success: bool,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub fn new(status_code: u16, success: bool, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status_code,
            success,
            headers,
            body: body.into(),
        }
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `fields` to `url` as `application/x-www-form-urlencoded`.
    async fn post_form(&self, url: &Url, fields: &[(&str, &str)]) -> Result<RawResponse, Error>;
}

/// [`HttpTransport`] backed by a [`reqwest::Client`].
///
/// Pass a preconfigured client through [`ReqwestTransport::with_client`] to set
/// timeouts, proxies or TLS options.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_form(&self, url: &Url, fields: &[(&str, &str)]) -> Result<RawResponse, Error> {
        let resp = self
            .http_client
            .post(url.clone())
            .form(fields)
            .send()
            .await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.text().await?;
        debug!(%url, status = status.as_u16(), body_len = body.len(), "form post finished");

        Ok(RawResponse {
            status_code: status.as_u16(),
            success: status.is_success(),
            headers,
            body,
        })
    }
}
