//! Compile-time registry of condition service configurations.
//!
//! Each condition provider is defined in a TOML file under `services/`.
//! The registry embeds these at compile time and exposes them via
//! [`all_services`] and [`enabled_services`]. The synthetic traffic
//! provider is registered here alongside the live air-quality API so that
//! a real traffic feed can replace it by swapping one TOML entry.

use serde::Deserialize;

/// A condition service configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionService {
    /// Unique identifier (e.g., `"open_meteo"`, `"synthetic_traffic"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Whether this service is active.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Selection order — lower values win first.
    pub priority: u32,
    /// Provider-specific configuration.
    pub provider: ProviderConfig,
}

/// Provider-specific configuration, tagged by `type` in TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// Open-Meteo air-quality API.
    OpenMeteoAirQuality {
        /// API base URL (e.g., `"https://air-quality-api.open-meteo.com/v1/air-quality"`).
        base_url: String,
    },
    /// Locally synthesized traffic conditions (no network).
    SyntheticTraffic,
}

const fn default_true() -> bool {
    true
}

impl ConditionService {
    /// Returns the provider's base URL.
    ///
    /// Returns an empty string for providers without one (e.g.,
    /// `SyntheticTraffic`).
    #[must_use]
    pub fn base_url(&self) -> &str {
        match &self.provider {
            ProviderConfig::OpenMeteoAirQuality { base_url } => base_url,
            ProviderConfig::SyntheticTraffic => "",
        }
    }
}

// ── Compile-time embedded TOML files ────────────────────────────────

const SERVICE_TOMLS: &[(&str, &str)] = &[
    ("open_meteo", include_str!("../services/open_meteo.toml")),
    (
        "synthetic_traffic",
        include_str!("../services/synthetic_traffic.toml"),
    ),
];

#[cfg(test)]
const EXPECTED_SERVICE_COUNT: usize = 2;

/// Returns all condition service configurations (enabled and disabled).
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time guarantee
/// since the configs are embedded).
#[must_use]
pub fn all_services() -> Vec<ConditionService> {
    SERVICE_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse condition service '{name}': {e}"))
        })
        .collect()
}

/// Returns only enabled services, sorted by priority (ascending).
#[must_use]
pub fn enabled_services() -> Vec<ConditionService> {
    let mut services: Vec<ConditionService> =
        all_services().into_iter().filter(|s| s.enabled).collect();
    services.sort_by_key(|s| s.priority);
    services
}
