//! Collaborator traits and their live implementations.
//!
//! The router only sees these traits; tests substitute stubs, and the CLI
//! wires up the live implementations built from the service registries.

use urban_pulse_conditions::{
    air_quality, service_registry as conditions_registry, traffic, ConditionsError,
};
use urban_pulse_conditions_models::{AirQualitySnapshot, Coordinates, TrafficSnapshot};
use urban_pulse_geocoder::{nominatim, service_registry as geocoder_registry, GeocodeError};

use crate::AssistantError;

/// Resolves a city name to coordinates.
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns the first-match coordinates for a city, or `None` when the
    /// geocoder has no result.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the lookup itself fails.
    async fn geocode(&self, city: &str) -> Result<Option<Coordinates>, GeocodeError>;
}

/// Fetches a current air-quality snapshot for coordinates.
#[async_trait::async_trait]
pub trait AirQualityProvider: Send + Sync {
    /// Returns the current snapshot for the location.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionsError`] if the fetch fails or the response has
    /// no current data.
    async fn current_air_quality(
        &self,
        coordinates: Coordinates,
    ) -> Result<AirQualitySnapshot, ConditionsError>;
}

/// Produces a current traffic snapshot for a city.
#[async_trait::async_trait]
pub trait TrafficProvider: Send + Sync {
    /// Returns the current snapshot for the city.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionsError`] if the lookup fails (the synthesized
    /// provider never does; a live provider may).
    async fn current_traffic(&self, city: &str) -> Result<TrafficSnapshot, ConditionsError>;
}

// ---------------------------------------------------------------------------
// Live implementations
// ---------------------------------------------------------------------------

/// Live Nominatim-backed geocoder.
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    /// Creates a geocoder against an explicit base URL.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Creates a geocoder from the highest-priority enabled service in
    /// the geocoding registry.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::Config`] if no geocoding service is
    /// enabled.
    pub fn from_registry() -> Result<Self, AssistantError> {
        let service = geocoder_registry::enabled_services()
            .into_iter()
            .next()
            .ok_or_else(|| AssistantError::Config {
                message: "No geocoding service enabled".to_string(),
            })?;
        Ok(Self::new(service.base_url().to_string()))
    }
}

#[async_trait::async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, city: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let place = nominatim::geocode_city(&self.client, &self.base_url, city).await?;
        Ok(place.map(|p| Coordinates {
            latitude: p.latitude,
            longitude: p.longitude,
        }))
    }
}

/// Live Open-Meteo air-quality provider.
pub struct OpenMeteoAirQuality {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoAirQuality {
    /// Creates a provider against an explicit base URL.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Creates a provider from the highest-priority enabled air-quality
    /// service in the conditions registry.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::Config`] if no air-quality service is
    /// enabled.
    pub fn from_registry() -> Result<Self, AssistantError> {
        let service = conditions_registry::enabled_services()
            .into_iter()
            .find(|s| {
                matches!(
                    s.provider,
                    conditions_registry::ProviderConfig::OpenMeteoAirQuality { .. }
                )
            })
            .ok_or_else(|| AssistantError::Config {
                message: "No air-quality service enabled".to_string(),
            })?;
        Ok(Self::new(service.base_url().to_string()))
    }
}

#[async_trait::async_trait]
impl AirQualityProvider for OpenMeteoAirQuality {
    async fn current_air_quality(
        &self,
        coordinates: Coordinates,
    ) -> Result<AirQualitySnapshot, ConditionsError> {
        air_quality::fetch_current(&self.client, &self.base_url, coordinates).await
    }
}

/// The synthesized traffic placeholder.
///
/// Draws values within fixed bands instead of calling a live feed. Sits
/// behind [`TrafficProvider`] so a real integration replaces it without
/// touching the router.
pub struct SyntheticTraffic;

#[async_trait::async_trait]
impl TrafficProvider for SyntheticTraffic {
    async fn current_traffic(&self, _city: &str) -> Result<TrafficSnapshot, ConditionsError> {
        Ok(traffic::synthesize())
    }
}
