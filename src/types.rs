//! Shared plugin-configuration types for the IntelX API.
//!
//! Every plugin kind (analyzers, connectors) reports the same base set of
//! configuration fields plus kind-specific extras. [`BaseConfig`] models
//! the shared set and is serde-flattened into each kind's config struct,
//! mirroring how the server composes its JSON schema.
//!
//! Field names match the IntelX API contract exactly (snake_case).
//! Optional fields use `#[serde(default)]` so sparse responses from older
//! server versions still decode; unknown fields are ignored for forward
//! compatibility.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration fields common to every IntelX plugin kind.
///
/// The listing endpoints return a JSON object keyed by plugin name; each
/// value repeats the name alongside these fields. `name` is the only
/// field the server always populates, so it is the only required one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseConfig {
    /// Unique plugin name, identical to the listing's mapping key.
    pub name: String,

    /// Dotted path of the server-side module implementing the plugin.
    #[serde(default)]
    pub python_module: String,

    /// Whether the plugin is disabled instance-wide.
    #[serde(default)]
    pub disabled: bool,

    /// Human-readable description of what the plugin does.
    #[serde(default)]
    pub description: String,

    /// Runtime scheduling parameters for the plugin.
    #[serde(default)]
    pub config: RuntimeConfig,

    /// Plugin parameters and their configured values. Shapes vary per
    /// plugin, so values stay as raw JSON.
    #[serde(default)]
    pub params: HashMap<String, serde_json::Value>,

    /// Secret slots the plugin expects (API keys etc.). The server
    /// redacts the values; only the slot metadata is returned.
    #[serde(default)]
    pub secrets: HashMap<String, serde_json::Value>,

    /// Result of the server's configuration check for this plugin.
    /// Absent on server versions that don't report it.
    #[serde(default)]
    pub verification: Option<Verification>,
}

/// Runtime scheduling parameters shared by all plugin kinds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Celery queue the plugin's tasks are routed to.
    #[serde(default)]
    pub queue: String,

    /// Soft time limit (seconds) for a single plugin run.
    #[serde(default)]
    pub soft_time_limit: u64,
}

/// Server-side configuration check for a plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verification {
    /// `true` when the plugin has everything it needs to run.
    pub configured: bool,

    /// Why the plugin is not runnable, when it isn't.
    #[serde(default)]
    pub error_message: Option<String>,

    /// Names of secret slots that are still unset.
    #[serde(default)]
    pub missing_secrets: Vec<String>,
}

/// Health-check outcome for a single plugin.
///
/// Decoded from the `{"status": <bool>}` body the healthcheck endpoints
/// return, and discarded immediately — callers receive the bare boolean.
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    /// `true` when the plugin's backing service is up.
    pub status: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_config_deserializes_full_response() {
        let json = r#"{
            "name": "Shodan_Honeyscore",
            "python_module": "shodan.Shodan",
            "disabled": false,
            "description": "scan an IP against Shodan Honeyscore API",
            "config": {"queue": "default", "soft_time_limit": 30},
            "params": {"shodan_analysis": {"value": "honeyscore", "type": "str"}},
            "secrets": {"api_key_name": {"env_var_key": "SHODAN_KEY"}},
            "verification": {
                "configured": false,
                "error_message": "missing secret: SHODAN_KEY",
                "missing_secrets": ["SHODAN_KEY"]
            }
        }"#;
        let config: BaseConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.name, "Shodan_Honeyscore");
        assert_eq!(config.python_module, "shodan.Shodan");
        assert!(!config.disabled);
        assert_eq!(config.config.queue, "default");
        assert_eq!(config.config.soft_time_limit, 30);
        assert!(config.params.contains_key("shodan_analysis"));
        let verification = config.verification.unwrap();
        assert!(!verification.configured);
        assert_eq!(verification.missing_secrets, vec!["SHODAN_KEY"]);
    }

    #[test]
    fn base_config_deserializes_minimal_response() {
        // Older server versions omit most fields; everything except the
        // name should fall back to its default.
        let json = r#"{"name": "Classic_DNS"}"#;
        let config: BaseConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.name, "Classic_DNS");
        assert!(config.python_module.is_empty());
        assert!(!config.disabled);
        assert_eq!(config.config.soft_time_limit, 0);
        assert!(config.params.is_empty());
        assert!(config.verification.is_none());
    }

    #[test]
    fn status_response_round_trips_both_values() {
        let up: StatusResponse = serde_json::from_str(r#"{"status": true}"#).unwrap();
        assert!(up.status);
        let down: StatusResponse = serde_json::from_str(r#"{"status": false}"#).unwrap();
        assert!(!down.status);
    }
}
