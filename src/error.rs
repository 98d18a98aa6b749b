//! Typed error hierarchy for the intelx-client crate.
//!
//! `IntelxError` is a structured enum that preserves diagnostic context at
//! each failure boundary. Every variant carries enough information for
//! callers to:
//! - Distinguish the failure category (construction, API, timeout, parse,
//!   network).
//! - Inspect the original cause via `source()` (thiserror derives this
//!   automatically from `#[source]` fields).
//! - Display a human-readable message that includes the relevant context
//!   (status code, server message, etc.).
//!
//! Variants map to real system boundaries: `Build` covers request/client
//! construction, `Api` covers non-success responses from the IntelX REST
//! API, `Network` covers transport-level failures that never produced an
//! HTTP status, `Timeout` covers the request deadline, and `Parse` covers
//! response bodies that don't match the expected schema. The library never
//! recovers, retries, or substitutes fallback values — every error
//! propagates directly to the caller.

use reqwest::StatusCode;

/// Unified error type for all intelx-client library operations.
///
/// Each variant corresponds to a distinct failure boundary in the system.
/// The `#[source]` attribute on inner errors enables `Error::source()`
/// chaining so callers (and logging frameworks) can traverse the full
/// cause chain.
#[derive(Debug, thiserror::Error)]
pub enum IntelxError {
    /// The request (or the HTTP client itself) could not be constructed.
    ///
    /// This covers:
    /// - A malformed request URL (e.g. a base URL missing its scheme).
    /// - A request body that failed to serialize as JSON.
    /// - An invalid PEM certificate supplied in `ClientOptions`.
    #[error("construction failed: {message}")]
    Build {
        /// Human-readable description of what could not be constructed.
        message: String,
        /// The underlying parse or serialization error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The IntelX API returned a non-success HTTP status code.
    ///
    /// The full response body is preserved. IntelX error responses contain
    /// diagnostic detail (e.g. `{"detail": "..."}` or `{"errors": ...}`)
    /// that is essential for debugging authentication problems, unknown
    /// plugin names, and server-side failures.
    #[error("API error {status}: {body}")]
    Api {
        /// The HTTP status code returned by the IntelX API.
        status: StatusCode,
        /// The raw response body text. May contain JSON error details
        /// from IntelX, or an empty string if the body could not be read.
        body: String,
    },

    /// The configured request deadline elapsed before the call resolved.
    ///
    /// This is distinct from [`IntelxError::Network`]: the request was
    /// aborted by the client's own deadline, not by a transport fault.
    /// Dropping the call's future cancels the request without producing
    /// any error value; this variant is the observable form of a
    /// deadline-driven abort.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// JSON deserialization failed when parsing an API response body.
    ///
    /// This occurs if the IntelX API returns an unexpected response shape
    /// for a success status.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A network-level failure occurred (DNS resolution, TCP connection,
    /// TLS handshake, etc.).
    ///
    /// No HTTP status code is available because the request did not
    /// complete. This wraps the underlying `reqwest::Error` which carries
    /// detailed transport diagnostics.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
}

impl From<reqwest::Error> for IntelxError {
    /// Splits transport failures into `Timeout` and `Network` so a
    /// deadline-driven abort stays distinguishable from a connection fault.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            IntelxError::Timeout(err)
        } else {
            IntelxError::Network(err)
        }
    }
}

/// Convenience alias used throughout the library.
/// Keeps function signatures concise while providing the full typed error.
pub type Result<T> = std::result::Result<T, IntelxError>;
