#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Condition snapshot types for the UrbanPulse assistant.
//!
//! A snapshot is one live reading for one city — either air quality from
//! Open-Meteo or traffic from the traffic provider. Snapshots are fetched
//! per query and discarded; nothing here is cached or stored.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair returned by the geocoder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// A current air-quality reading for one location.
///
/// All fields use the European scale / µg/m³ as reported by Open-Meteo.
/// Individual pollutants may be absent when the upstream model has no
/// value for the location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualitySnapshot {
    /// European Air Quality Index (unitless, thresholds 20/40/60/80/100).
    pub european_aqi: Option<f64>,
    /// PM2.5 concentration in µg/m³.
    pub pm2_5: Option<f64>,
    /// PM10 concentration in µg/m³.
    pub pm10: Option<f64>,
    /// Ozone concentration in µg/m³.
    pub ozone: Option<f64>,
    /// Nitrogen dioxide concentration in µg/m³.
    pub nitrogen_dioxide: Option<f64>,
}

/// Coarse congestion buckets reported in traffic replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    /// Free-flowing traffic.
    Light,
    /// Normal daytime load.
    Moderate,
    /// Slowdowns on major roads.
    Heavy,
    /// Near-standstill conditions.
    Congested,
}

impl CongestionLevel {
    /// All levels, in severity order.
    pub const ALL: &[Self] = &[Self::Light, Self::Moderate, Self::Heavy, Self::Congested];

    /// Whether this level warrants an alternate-route suggestion.
    #[must_use]
    pub const fn is_severe(self) -> bool {
        matches!(self, Self::Heavy | Self::Congested)
    }
}

impl std::fmt::Display for CongestionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Heavy => write!(f, "heavy"),
            Self::Congested => write!(f, "congested"),
        }
    }
}

/// A current traffic reading for one city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSnapshot {
    /// Overall congestion bucket.
    pub congestion: CongestionLevel,
    /// Congestion as a percentage of capacity, in `[20, 100)`.
    pub congestion_percent: f64,
    /// Average speed on monitored roads, in mph, in `[10, 50)`.
    pub average_speed_mph: f64,
}
