//! HTTP transport for the IntelX REST API.
//!
//! `IntelxClient` wraps a `reqwest::Client` and the immutable connection
//! configuration, exposing the two transport primitives every endpoint
//! module builds on:
//!
//! - [`IntelxClient::build_request`] — construct an authenticated request
//!   with the Content-Type header and optional JSON body.
//! - [`IntelxClient::execute`] — send it, normalizing non-2xx responses
//!   into [`IntelxError::Api`] and success into a raw [`SuccessResponse`]
//!   envelope that the endpoint module decodes into its typed result.
//!
//! The client holds no mutable state across calls: the connection pool
//! inside `reqwest::Client` is internally synchronized, so one
//! `IntelxClient` can be shared freely across tasks. There is no retry,
//! no caching, and no logging at this layer.

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Certificate, Client, Method, Request, StatusCode};
use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::error::{IntelxError, Result};

/// Content-Type value attached to every request, including bodyless GETs.
/// The IntelX server expects it on all calls.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Connect timeout for the IntelX API HTTP client.
/// Covers TCP + TLS handshake only.
const API_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default overall request timeout, used when `ClientOptions::timeout`
/// is not set. Covers the full round-trip including body download.
/// Config listings on large instances are at most a few hundred KB, so
/// 30 seconds is ample.
const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection configuration for an IntelX instance.
///
/// Immutable after construction; owned exclusively by the
/// [`IntelxClient`] built from it.
pub struct ClientOptions {
    /// Base URL of the IntelX instance, without a trailing slash
    /// (e.g. `"https://intelx.example.com"`). Endpoint paths are appended
    /// verbatim.
    pub url: String,

    /// API key for the instance. Sent as `Authorization: Token <key>`
    /// on every request.
    pub token: String,

    /// Optional PEM-encoded root certificate, for self-hosted instances
    /// served behind a private CA.
    pub certificate: Option<Vec<u8>>,

    /// Overall per-request deadline. `None` uses the 30-second default.
    /// When the deadline elapses the call fails with
    /// [`IntelxError::Timeout`].
    pub timeout: Option<Duration>,
}

/// Raw success envelope returned by [`IntelxClient::execute`].
///
/// Carries the payload as opaque bytes; each endpoint module decodes it
/// into its own typed result. Non-2xx responses never produce one of
/// these — they become [`IntelxError::Api`] instead.
#[derive(Debug)]
pub struct SuccessResponse {
    /// The 2xx status code of the response.
    pub status: StatusCode,
    /// The raw response body.
    pub data: Bytes,
}

/// HTTP client for the IntelX REST API.
///
/// `base_url` comes from [`ClientOptions`] rather than a compile-time
/// constant so tests can point it at a local mock server.
pub struct IntelxClient {
    http: Client,
    options: ClientOptions,
}

impl IntelxClient {
    /// Builds a client from the given connection options.
    ///
    /// # Errors
    ///
    /// Returns [`IntelxError::Build`] if the optional certificate is not
    /// valid PEM or the underlying HTTP client cannot be constructed.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(API_CONNECT_TIMEOUT)
            .timeout(options.timeout.unwrap_or(API_REQUEST_TIMEOUT));

        if let Some(pem) = &options.certificate {
            let cert = Certificate::from_pem(pem).map_err(|err| IntelxError::Build {
                message: "invalid PEM certificate".to_string(),
                source: Some(Box::new(err)),
            })?;
            builder = builder.add_root_certificate(cert);
        }

        let http = builder.build().map_err(|err| IntelxError::Build {
            message: "failed to build HTTP client".to_string(),
            source: Some(Box::new(err)),
        })?;

        Ok(IntelxClient { http, options })
    }

    /// The configured base URL of the IntelX instance.
    pub fn base_url(&self) -> &str {
        &self.options.url
    }

    /// Constructs a request for the given absolute URL.
    ///
    /// Validates the URL, attaches the Content-Type and
    /// `Authorization: Token` headers, and serializes `body` as JSON when
    /// present. Pass `None::<&()>` for bodyless requests — the
    /// Content-Type header is still attached, which the IntelX server
    /// requires even on GETs.
    ///
    /// # Errors
    ///
    /// Returns [`IntelxError::Build`] if the URL is malformed or the body
    /// fails to serialize.
    pub fn build_request<B>(
        &self,
        method: Method,
        content_type: &str,
        body: Option<&B>,
        url: &str,
    ) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let parsed = Url::parse(url).map_err(|err| IntelxError::Build {
            message: format!("invalid request URL `{url}`"),
            source: Some(Box::new(err)),
        })?;

        let mut builder = self
            .http
            .request(method, parsed)
            .header(CONTENT_TYPE, content_type)
            .header(AUTHORIZATION, format!("Token {}", self.options.token));
        if let Some(payload) = body {
            builder = builder.json(payload);
        }

        builder.build().map_err(|err| IntelxError::Build {
            message: "failed to build request".to_string(),
            source: Some(Box::new(err)),
        })
    }

    /// Sends a request and normalizes the outcome.
    ///
    /// - 2xx → [`SuccessResponse`] with the raw body bytes.
    /// - Non-2xx → [`IntelxError::Api`] carrying the status code and the
    ///   response body text (IntelX puts its diagnostic detail there).
    /// - Deadline elapsed → [`IntelxError::Timeout`].
    /// - Transport failure → [`IntelxError::Network`].
    ///
    /// Exactly one round trip; never retried.
    pub async fn execute(&self, request: Request) -> Result<SuccessResponse> {
        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            // Preserve the body as the error message; an unreadable body
            // degrades to an empty string rather than masking the status.
            let body = response.text().await.unwrap_or_default();
            return Err(IntelxError::Api { status, body });
        }

        let data = response.bytes().await?;
        Ok(SuccessResponse { status, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> IntelxClient {
        IntelxClient::new(ClientOptions {
            url: "http://localhost".to_string(),
            token: "secret".to_string(),
            certificate: None,
            timeout: None,
        })
        .unwrap()
    }

    #[test]
    fn build_request_sets_auth_and_content_type() {
        let client = test_client();
        let request = client
            .build_request::<()>(
                Method::GET,
                JSON_CONTENT_TYPE,
                None,
                "http://localhost/api/get_analyzer_configs",
            )
            .unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.headers()[CONTENT_TYPE],
            "application/json",
            "Content-Type must be sent even on bodyless GETs"
        );
        assert_eq!(request.headers()[AUTHORIZATION], "Token secret");
        assert!(request.body().is_none(), "GET must not carry a body");
    }

    #[test]
    fn build_request_attaches_json_body() {
        let client = test_client();
        let payload = serde_json::json!({"label": "phishing", "color": "#ff0000"});
        let request = client
            .build_request(
                Method::POST,
                JSON_CONTENT_TYPE,
                Some(&payload),
                "http://localhost/api/tags",
            )
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert!(request.body().is_some(), "POST body should be attached");
    }

    #[test]
    fn build_request_rejects_malformed_url() {
        let client = test_client();
        let result =
            client.build_request::<()>(Method::GET, JSON_CONTENT_TYPE, None, "://missing-scheme");

        match result {
            Err(IntelxError::Build { message, .. }) => {
                assert!(
                    message.contains("://missing-scheme"),
                    "error should name the offending URL, got: {message}"
                );
            }
            other => panic!("expected Build error, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_invalid_certificate() {
        let result = IntelxClient::new(ClientOptions {
            url: "https://intelx.example.com".to_string(),
            token: "secret".to_string(),
            certificate: Some(b"not a pem".to_vec()),
            timeout: None,
        });

        assert!(
            matches!(result, Err(IntelxError::Build { .. })),
            "garbage certificate bytes must fail construction"
        );
    }

    #[test]
    fn base_url_returns_configured_url() {
        let client = test_client();
        assert_eq!(client.base_url(), "http://localhost");
    }
}
