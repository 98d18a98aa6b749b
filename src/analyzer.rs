//! Analyzer configuration and health-check endpoints.
//!
//! This module covers the "analyzer" endpoint family:
//!
//! - [`get_analyzer_configs`] — list every analyzer configured on the
//!   instance, ordered by name.
//! - [`analyzer_health_check`] — ask the instance whether one analyzer's
//!   backing service is up.
//!
//! An analyzer is a server-side pluggable worker that inspects an
//! observable or file and reports findings. The listing endpoint returns
//! a JSON object keyed by analyzer name; because object key order is not
//! guaranteed by the decode step, [`get_analyzer_configs`] sorts the names
//! before emitting the configs so output order is deterministic and
//! diff-stable across calls.

use std::collections::HashMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{IntelxClient, JSON_CONTENT_TYPE};
use crate::error::Result;
use crate::types::{BaseConfig, StatusResponse};

/// Listing route, relative to the configured base URL.
const ANALYZER_CONFIGS_PATH: &str = "/api/get_analyzer_configs";

/// Health-check route template. `{name}` is replaced with the analyzer
/// name, unescaped — callers must supply a URL-safe identifier.
const ANALYZER_HEALTHCHECK_PATH: &str = "/api/analyzer/{name}/healthcheck";

/// How an analyzer is configured on an IntelX instance.
///
/// Field names match the IntelX API contract exactly. The shared base
/// fields ([`BaseConfig`]) are flattened in, mirroring how the server
/// composes the schema. Capability flags and filetype lists use
/// `#[serde(default)]` so responses from servers that omit them still
/// decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Configuration fields shared by all plugin kinds.
    #[serde(flatten)]
    pub base: BaseConfig,

    /// What the analyzer operates on: `"file"` or `"observable"`.
    #[serde(rename = "type", default)]
    pub analyzer_type: String,

    /// Whether the analyzer calls out to an external service.
    #[serde(default)]
    pub external_service: bool,

    /// Whether running the analyzer may leak the submitted data to a
    /// third party.
    #[serde(default)]
    pub leaks_info: bool,

    /// Whether the analyzer runs inside its own Docker container.
    #[serde(default)]
    pub docker_based: bool,

    /// For file analyzers, whether the analyzer is run against the
    /// file's hash instead of its content.
    #[serde(default)]
    pub run_hash: bool,

    /// Hash algorithm used when `run_hash` is set (e.g. `"md5"`).
    #[serde(default)]
    pub run_hash_type: String,

    /// Mimetypes the analyzer accepts. Empty means no restriction.
    #[serde(default)]
    pub supported_filetypes: Vec<String>,

    /// Mimetypes the analyzer explicitly rejects.
    #[serde(default)]
    pub not_supported_filetypes: Vec<String>,

    /// Observable classifications the analyzer accepts
    /// (e.g. `"ip"`, `"domain"`, `"hash"`).
    #[serde(default)]
    pub observable_supported: Vec<String>,
}

/// Lists every analyzer configuration on the instance, ordered by name.
///
/// Endpoint: `GET /api/get_analyzer_configs`
///
/// The server returns a JSON object mapping analyzer name to
/// configuration. Map iteration order is unspecified, so the names are
/// extracted and sorted (lexicographic, case-sensitive, byte-wise
/// ascending) before the configs are emitted — repeated calls over the
/// same data always produce the same order. An instance with no
/// analyzers yields an empty `Vec`, not an error.
///
/// # Errors
///
/// - [`IntelxError::Api`](crate::error::IntelxError::Api) — non-success
///   HTTP status (e.g. 401 for a bad token).
/// - [`IntelxError::Parse`](crate::error::IntelxError::Parse) — the body
///   does not match the expected mapping shape.
/// - [`IntelxError::Network`](crate::error::IntelxError::Network) /
///   [`IntelxError::Timeout`](crate::error::IntelxError::Timeout) —
///   transport failure or deadline elapsed.
pub async fn get_analyzer_configs(client: &IntelxClient) -> Result<Vec<AnalyzerConfig>> {
    let url = format!("{}{}", client.base_url(), ANALYZER_CONFIGS_PATH);
    let request = client.build_request::<()>(Method::GET, JSON_CONTENT_TYPE, None, &url)?;
    let response = client.execute(request).await?;

    let mut configs: HashMap<String, AnalyzerConfig> = serde_json::from_slice(&response.data)?;

    // Mapping keys are unique by construction; sorting them fixes the
    // emission order.
    let mut names: Vec<String> = configs.keys().cloned().collect();
    names.sort_unstable();

    Ok(names
        .iter()
        .filter_map(|name| configs.remove(name))
        .collect())
}

/// Checks whether the named analyzer's backing service is up.
///
/// Endpoint: `GET /api/analyzer/{name}/healthcheck`
///
/// `analyzer_name` is substituted into the route unescaped, so it must be
/// a URL-safe identifier (analyzer names are). Returns the server's
/// boolean verdict as-is. A check that cannot be completed surfaces an
/// error — never a silent `false`.
///
/// # Errors
///
/// - [`IntelxError::Api`](crate::error::IntelxError::Api) — non-success
///   HTTP status (e.g. 404 for an unknown analyzer).
/// - [`IntelxError::Parse`](crate::error::IntelxError::Parse) — the body
///   does not match the `{"status": <bool>}` shape.
/// - [`IntelxError::Network`](crate::error::IntelxError::Network) /
///   [`IntelxError::Timeout`](crate::error::IntelxError::Timeout) —
///   transport failure or deadline elapsed.
pub async fn analyzer_health_check(client: &IntelxClient, analyzer_name: &str) -> Result<bool> {
    let route = ANALYZER_HEALTHCHECK_PATH.replace("{name}", analyzer_name);
    let url = format!("{}{}", client.base_url(), route);
    let request = client.build_request::<()>(Method::GET, JSON_CONTENT_TYPE, None, &url)?;
    let response = client.execute(request).await?;

    let status: StatusResponse = serde_json::from_slice(&response.data)?;
    Ok(status.status)
}
