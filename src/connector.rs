//! Connector configuration and health-check endpoints.
//!
//! This module covers the "connector" endpoint family, the mirror image
//! of the analyzer one:
//!
//! - [`get_connector_configs`] — list every connector configured on the
//!   instance, ordered by name.
//! - [`connector_health_check`] — ask the instance whether one
//!   connector's backing service is up.
//!
//! A connector forwards finished analysis results to an external platform
//! (MISP, OpenCTI, YETI, ...). Its configuration record is the shared
//! base set plus the maximum TLP level the connector is allowed to ship.

use std::collections::HashMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{IntelxClient, JSON_CONTENT_TYPE};
use crate::error::Result;
use crate::types::{BaseConfig, StatusResponse};

/// Listing route, relative to the configured base URL.
const CONNECTOR_CONFIGS_PATH: &str = "/api/get_connector_configs";

/// Health-check route template. `{name}` is replaced with the connector
/// name, unescaped — callers must supply a URL-safe identifier.
const CONNECTOR_HEALTHCHECK_PATH: &str = "/api/connector/{name}/healthcheck";

/// Traffic-light-protocol level attached to a connector.
///
/// Unrecognized levels (the TLP standard has been revised before) decode
/// as [`Tlp::Unknown`] rather than failing the whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tlp {
    /// No disclosure restriction (TLP 2.0 name).
    Clear,
    /// No disclosure restriction (TLP 1.0 name, still emitted by older
    /// instances).
    White,
    /// Limited disclosure within the community.
    Green,
    /// Limited disclosure within the organization.
    Amber,
    /// No disclosure outside the exchange itself.
    Red,
    /// Catch-all for level strings this client doesn't recognize.
    #[serde(other)]
    Unknown,
}

/// How a connector is configured on an IntelX instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Configuration fields shared by all plugin kinds.
    #[serde(flatten)]
    pub base: BaseConfig,

    /// Highest TLP level the connector is allowed to forward. Absent on
    /// servers that don't enforce one.
    #[serde(default)]
    pub maximum_tlp: Option<Tlp>,
}

/// Lists every connector configuration on the instance, ordered by name.
///
/// Endpoint: `GET /api/get_connector_configs`
///
/// Same contract as
/// [`get_analyzer_configs`](crate::analyzer::get_analyzer_configs): the
/// name → config mapping is decoded, the names sorted lexicographically,
/// and the configs emitted in that order. An empty mapping yields an
/// empty `Vec`.
///
/// # Errors
///
/// Same taxonomy as the analyzer listing: `Api`, `Parse`, `Network`,
/// `Timeout` (see [`IntelxError`](crate::error::IntelxError)).
pub async fn get_connector_configs(client: &IntelxClient) -> Result<Vec<ConnectorConfig>> {
    let url = format!("{}{}", client.base_url(), CONNECTOR_CONFIGS_PATH);
    let request = client.build_request::<()>(Method::GET, JSON_CONTENT_TYPE, None, &url)?;
    let response = client.execute(request).await?;

    let mut configs: HashMap<String, ConnectorConfig> = serde_json::from_slice(&response.data)?;

    let mut names: Vec<String> = configs.keys().cloned().collect();
    names.sort_unstable();

    Ok(names
        .iter()
        .filter_map(|name| configs.remove(name))
        .collect())
}

/// Checks whether the named connector's backing service is up.
///
/// Endpoint: `GET /api/connector/{name}/healthcheck`
///
/// `connector_name` is substituted into the route unescaped, so it must
/// be a URL-safe identifier. A check that cannot be completed surfaces
/// an error — never a silent `false`.
///
/// # Errors
///
/// Same taxonomy as
/// [`analyzer_health_check`](crate::analyzer::analyzer_health_check).
pub async fn connector_health_check(client: &IntelxClient, connector_name: &str) -> Result<bool> {
    let route = CONNECTOR_HEALTHCHECK_PATH.replace("{name}", connector_name);
    let url = format!("{}{}", client.base_url(), route);
    let request = client.build_request::<()>(Method::GET, JSON_CONTENT_TYPE, None, &url)?;
    let response = client.execute(request).await?;

    let status: StatusResponse = serde_json::from_slice(&response.data)?;
    Ok(status.status)
}
