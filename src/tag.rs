//! Tag CRUD endpoints.
//!
//! Tags are the labels an IntelX instance attaches to jobs for triage
//! (e.g. "phishing", "malware"). Unlike the plugin listings, tags are
//! keyed by numeric id and the server returns them as a JSON array, so
//! no client-side reordering applies.
//!
//! - [`list_tags`] / [`get_tag`] — read endpoints.
//! - [`create_tag`] / [`update_tag`] — write endpoints taking
//!   [`TagParams`] as the JSON body.
//! - [`delete_tag`] — removal; the server answers `204 No Content`.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{IntelxClient, JSON_CONTENT_TYPE};
use crate::error::Result;

/// Collection route, relative to the configured base URL. Single-tag
/// routes append `/{id}`.
const TAGS_PATH: &str = "/api/tags";

/// A tag as returned by the IntelX API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Server-assigned numeric identifier.
    pub id: u64,

    /// Display label, unique per instance.
    pub label: String,

    /// Display color as a hex string (e.g. `"#ff0000"`).
    pub color: String,
}

/// Request body for creating or updating a tag.
#[derive(Debug, Clone, Serialize)]
pub struct TagParams {
    /// Display label. Must be unique per instance; the server answers
    /// 400 on a duplicate.
    pub label: String,

    /// Display color as a hex string.
    pub color: String,
}

/// Lists every tag on the instance, in server order.
///
/// Endpoint: `GET /api/tags`
///
/// # Errors
///
/// `Api`, `Parse`, `Network`, `Timeout` — see
/// [`IntelxError`](crate::error::IntelxError).
pub async fn list_tags(client: &IntelxClient) -> Result<Vec<Tag>> {
    let url = format!("{}{}", client.base_url(), TAGS_PATH);
    let request = client.build_request::<()>(Method::GET, JSON_CONTENT_TYPE, None, &url)?;
    let response = client.execute(request).await?;

    Ok(serde_json::from_slice(&response.data)?)
}

/// Retrieves a single tag by id.
///
/// Endpoint: `GET /api/tags/{id}`
///
/// # Errors
///
/// `Api` (404 for an unknown id), `Parse`, `Network`, `Timeout`.
pub async fn get_tag(client: &IntelxClient, tag_id: u64) -> Result<Tag> {
    let url = format!("{}{}/{}", client.base_url(), TAGS_PATH, tag_id);
    let request = client.build_request::<()>(Method::GET, JSON_CONTENT_TYPE, None, &url)?;
    let response = client.execute(request).await?;

    Ok(serde_json::from_slice(&response.data)?)
}

/// Creates a tag and returns the stored record, id included.
///
/// Endpoint: `POST /api/tags`
///
/// # Errors
///
/// `Api` (400 for a duplicate label), `Parse`, `Network`, `Timeout`.
pub async fn create_tag(client: &IntelxClient, params: &TagParams) -> Result<Tag> {
    let url = format!("{}{}", client.base_url(), TAGS_PATH);
    let request = client.build_request(Method::POST, JSON_CONTENT_TYPE, Some(params), &url)?;
    let response = client.execute(request).await?;

    Ok(serde_json::from_slice(&response.data)?)
}

/// Replaces a tag's label and color, returning the updated record.
///
/// Endpoint: `PUT /api/tags/{id}`
///
/// # Errors
///
/// `Api` (404 for an unknown id), `Parse`, `Network`, `Timeout`.
pub async fn update_tag(client: &IntelxClient, tag_id: u64, params: &TagParams) -> Result<Tag> {
    let url = format!("{}{}/{}", client.base_url(), TAGS_PATH, tag_id);
    let request = client.build_request(Method::PUT, JSON_CONTENT_TYPE, Some(params), &url)?;
    let response = client.execute(request).await?;

    Ok(serde_json::from_slice(&response.data)?)
}

/// Deletes a tag.
///
/// Endpoint: `DELETE /api/tags/{id}`
///
/// The server answers `204 No Content`; any success status counts as a
/// completed deletion and the empty body is discarded.
///
/// # Errors
///
/// `Api` (404 for an unknown id), `Network`, `Timeout`.
pub async fn delete_tag(client: &IntelxClient, tag_id: u64) -> Result<()> {
    let url = format!("{}{}/{}", client.base_url(), TAGS_PATH, tag_id);
    let request = client.build_request::<()>(Method::DELETE, JSON_CONTENT_TYPE, None, &url)?;
    client.execute(request).await?;

    Ok(())
}
