//! HTTP transport seam between the client and the network.
//!
//! The token manager and query executor talk to Spotify through the
//! [`Transport`] trait only, which keeps the HTTP layer replaceable by stub
//! implementations in tests. [`HttpTransport`] is the reqwest-backed
//! implementation used by the CLI.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::AUTHORIZATION};
use thiserror::Error;

/// Status code and raw body of a completed request.
///
/// Decoding is left to the caller; a transport only reports what came back.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// A request that never produced a response: connect failure, TLS failure,
/// or timeout. All are treated identically by the client.
#[derive(Error, Debug)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}

/// Performs authenticated GET/POST calls with a bounded timeout.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a form-encoded POST carrying a prebuilt `Authorization` header.
    ///
    /// Used for the token exchange, where the header value is the Basic
    /// credential pair.
    async fn post_form(
        &self,
        url: &str,
        authorization: &str,
        form: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError>;

    /// Issues a GET with query parameters and a bearer token.
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        bearer_token: &str,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError>;
}

/// reqwest-backed [`Transport`].
///
/// One shared `Client` keeps connection pooling across calls; the timeout is
/// applied per request so each caller keeps its own bound.
#[derive(Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(
        &self,
        url: &str,
        authorization: &str,
        form: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, authorization)
            .form(form)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }

    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        bearer_token: &str,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(bearer_token)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
