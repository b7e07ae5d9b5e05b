//! HTTP plumbing for lookups.
//!
//! [`LookupTransport`] is the seam between the executor and the network; the
//! executor only ever sees a status code and a body. [`ReqwestTransport`] is
//! the real implementation, tests use scripted fakes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::error::LookupError;
use crate::request::LookupRequest;

/// Path of the organization lookup endpoint, relative to the service root.
pub const LOOKUP_PATH: &str = "api/v1/enrichment/lookup/organization";

/// Service root; the versioned API path is appended by [`lookup_endpoint`].
pub const DEFAULT_BASE_URL: &str = "https://publicapi.cluedin.net/";

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends one lookup. Errors are reserved for exchanges that never completed;
/// every HTTP status, including failures, comes back as a [`RawResponse`].
#[async_trait]
pub trait LookupTransport: Send + Sync {
    async fn send(&self, request: &LookupRequest, token: &str)
        -> Result<RawResponse, LookupError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestTransport {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| LookupError::Configuration(format!("HTTP client build failed: {e}")))?;
        Ok(Self {
            client,
            endpoint: lookup_endpoint(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LookupTransport for ReqwestTransport {
    async fn send(
        &self,
        request: &LookupRequest,
        token: &str,
    ) -> Result<RawResponse, LookupError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&request.query_pairs())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| LookupError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(format!("reading response body failed: {e}")))?;
        debug!(status, body_len = body.len(), "lookup_response");
        Ok(RawResponse { status, body })
    }
}

/// Resolve the lookup endpoint against the service root `base_url`.
///
/// `api/v1/enrichment/lookup/organization` is appended below the root, and
/// below any path prefix the root carries. A missing trailing slash is
/// tolerated so `https://host/proxy` and `https://host/proxy/` behave the same.
pub fn lookup_endpoint(base_url: &str) -> Result<Url, LookupError> {
    let trimmed = base_url.trim();
    let mut base = trimmed.to_owned();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base)
        .and_then(|base| base.join(LOOKUP_PATH))
        .map_err(|e| LookupError::Configuration(format!("invalid base URL '{trimmed}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_versioned_path_to_default_root() {
        let url = lookup_endpoint(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            url.as_str(),
            "https://publicapi.cluedin.net/api/v1/enrichment/lookup/organization"
        );
    }

    #[test]
    fn endpoint_appends_versioned_path_to_host_root() {
        for base in ["https://host/", "https://host"] {
            let url = lookup_endpoint(base).unwrap();
            assert_eq!(
                url.as_str(),
                "https://host/api/v1/enrichment/lookup/organization",
                "{base}"
            );
        }
    }

    #[test]
    fn endpoint_keeps_a_path_prefix_on_the_root() {
        let url = lookup_endpoint("https://api.test/proxy").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.test/proxy/api/v1/enrichment/lookup/organization"
        );
    }

    #[test]
    fn invalid_base_is_a_configuration_error() {
        let err = lookup_endpoint("not a url").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn transport_builds_with_default_base() {
        let transport = ReqwestTransport::new(
            DEFAULT_BASE_URL,
            Duration::from_secs(30),
            Duration::from_secs(10),
        )
        .unwrap();
        assert!(transport.endpoint().as_str().ends_with(LOOKUP_PATH));
    }
}
