#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Live condition collaborators for the UrbanPulse assistant.
//!
//! Two data paths:
//!
//! 1. **Air quality** — the Open-Meteo air-quality API, queried per
//!    request for a single current snapshot (never hourly series).
//! 2. **Traffic** — a synthesized placeholder that draws values within
//!    fixed bands. It sits behind the same service registry seam as air
//!    quality so a live provider can be swapped in without touching the
//!    router.
//!
//! Provider endpoints are defined in TOML files under `services/` and
//! exposed through the [`service_registry`].

pub mod air_quality;
pub mod service_registry;
pub mod traffic;

use thiserror::Error;

/// Errors from condition fetch operations.
#[derive(Debug, Error)]
pub enum ConditionsError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// The response carried no current conditions.
    #[error("Response has no current conditions")]
    MissingCurrent,
}
