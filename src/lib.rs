//! Async Rust client library for the IntelX threat-intelligence platform REST API.
//!
//! Provides an authenticated HTTP transport plus thin, strongly-typed
//! wrappers over the platform's plugin and tag endpoints. Every operation
//! is a single round trip: build the request, send it, decode the JSON
//! body into a typed result. There is no retry, no caching, and no
//! logging — errors carry their full context and surface directly to the
//! caller.
//!
//! # Modules
//!
//! - [`analyzer`] — analyzer configuration listing and health checks.
//! - [`client`] — the HTTP transport ([`client::IntelxClient`]) and its
//!   connection options.
//! - [`connector`] — connector configuration listing and health checks.
//! - [`error`] — typed error hierarchy ([`error::IntelxError`]) for all
//!   library operations.
//! - [`tag`] — tag CRUD.
//! - [`types`] — configuration types shared across plugin kinds.
//!
//! # Quick Start
//!
//! ```ignore
//! use intelx_client::analyzer::{analyzer_health_check, get_analyzer_configs};
//! use intelx_client::client::{ClientOptions, IntelxClient};
//!
//! let client = IntelxClient::new(ClientOptions {
//!     url: "https://intelx.example.com".to_string(),
//!     token: std::env::var("INTELX_TOKEN")?,
//!     certificate: None,
//!     timeout: None,
//! })?;
//!
//! // Configs come back sorted by analyzer name.
//! let configs = get_analyzer_configs(&client).await?;
//! let up = analyzer_health_check(&client, "Shodan_Honeyscore").await?;
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod client;
pub mod connector;
pub mod error;
pub mod tag;
pub mod types;
