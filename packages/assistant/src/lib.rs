#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Natural-language query router and responder for the UrbanPulse
//! assistant.
//!
//! One linear pipeline per query: classify intent, extract a city,
//! call the matching collaborator, fill a reply template. Air-quality
//! queries geocode the city and fetch a live Open-Meteo snapshot;
//! traffic queries go straight to the traffic provider. Anything else
//! gets a fixed can't-help reply with zero collaborator calls.
//!
//! [`Assistant::respond`] never fails: every collaborator error degrades
//! to a plain-language apology. Each query is attempted exactly once —
//! no retries, no caching, no cross-query state beyond the
//! [`transcript::Transcript`] the front end keeps.

pub mod city;
pub mod collaborators;
pub mod intent;
pub mod reply;
pub mod transcript;
pub mod voice;

use thiserror::Error;
use urban_pulse_assistant_models::Intent;
use urban_pulse_conditions::ConditionsError;
use urban_pulse_geocoder::GeocodeError;

use crate::collaborators::{AirQualityProvider, Geocoder, TrafficProvider};

/// Errors that can occur while answering a query.
///
/// These never escape [`Assistant::respond`]; they exist so the handlers
/// can use `?` internally before the conversion to apology text.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The geocoder returned no results for the extracted city.
    #[error("No geocoding results for {city}")]
    GeocodeNotFound {
        /// The city that could not be resolved.
        city: String,
    },

    /// The geocoding request itself failed.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    /// The conditions fetch failed or carried no current data.
    #[error(transparent)]
    Conditions(#[from] ConditionsError),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// Description.
        message: String,
    },
}

/// The query router/responder.
///
/// Holds one boxed collaborator per data path. Construct with stubs in
/// tests or via [`Assistant::from_registry`] for the live services.
pub struct Assistant {
    geocoder: Box<dyn Geocoder>,
    air_quality: Box<dyn AirQualityProvider>,
    traffic: Box<dyn TrafficProvider>,
}

impl Assistant {
    /// Creates an assistant over explicit collaborators.
    #[must_use]
    pub fn new(
        geocoder: Box<dyn Geocoder>,
        air_quality: Box<dyn AirQualityProvider>,
        traffic: Box<dyn TrafficProvider>,
    ) -> Self {
        Self {
            geocoder,
            air_quality,
            traffic,
        }
    }

    /// Creates an assistant wired to the live collaborators configured
    /// in the service registries.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::Config`] if a required service is not
    /// enabled in its registry.
    pub fn from_registry() -> Result<Self, AssistantError> {
        Ok(Self::new(
            Box::new(collaborators::NominatimGeocoder::from_registry()?),
            Box::new(collaborators::OpenMeteoAirQuality::from_registry()?),
            Box::new(collaborators::SyntheticTraffic),
        ))
    }

    /// Answers a free-text query.
    ///
    /// Never fails: unknown intents get the fixed can't-help reply, and
    /// collaborator failures degrade to apology sentences naming the
    /// city. Each query issues at most one geocode and one fetch.
    pub async fn respond(&self, query: &str) -> String {
        let intent = intent::classify(query);
        log::debug!("Classified query as {intent}");

        match intent {
            Intent::Unknown => reply::UNKNOWN_INTENT_REPLY.to_string(),
            Intent::AirQuality => {
                let city = city::extract_city(query);
                match self.air_quality_report(&city).await {
                    Ok(text) => text,
                    Err(err) => {
                        log::warn!("Air quality query for {city} failed: {err}");
                        match err {
                            AssistantError::GeocodeNotFound { .. }
                            | AssistantError::Geocode(_) => reply::geocode_apology(&city),
                            _ => reply::air_quality_apology(&city),
                        }
                    }
                }
            }
            Intent::Traffic => {
                let city = city::extract_city(query);
                match self.traffic.current_traffic(&city).await {
                    Ok(snapshot) => reply::traffic_reply(&city, &snapshot),
                    Err(err) => {
                        log::warn!("Traffic query for {city} failed: {err}");
                        reply::traffic_apology(&city)
                    }
                }
            }
        }
    }

    /// Geocodes the city, fetches the current snapshot, and renders the
    /// report.
    async fn air_quality_report(&self, city: &str) -> Result<String, AssistantError> {
        let coordinates = self.geocoder.geocode(city).await?.ok_or_else(|| {
            AssistantError::GeocodeNotFound {
                city: city.to_string(),
            }
        })?;

        let snapshot = self.air_quality.current_air_quality(coordinates).await?;

        // A snapshot without an AQI value can't be reported — the label
        // and recommendation both key off it.
        let aqi = snapshot
            .european_aqi
            .ok_or(ConditionsError::MissingCurrent)?;

        Ok(reply::air_quality_reply(city, aqi, &snapshot))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use urban_pulse_conditions_models::{
        AirQualitySnapshot, Coordinates, CongestionLevel, TrafficSnapshot,
    };

    use super::*;

    struct StubGeocoder {
        result: Option<Coordinates>,
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl Geocoder for StubGeocoder {
        async fn geocode(&self, _city: &str) -> Result<Option<Coordinates>, GeocodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(GeocodeError::Parse {
                    message: "stub failure".to_string(),
                });
            }
            Ok(self.result)
        }
    }

    struct StubAirQuality {
        snapshot: AirQualitySnapshot,
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl AirQualityProvider for StubAirQuality {
        async fn current_air_quality(
            &self,
            _coordinates: Coordinates,
        ) -> Result<AirQualitySnapshot, ConditionsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ConditionsError::MissingCurrent);
            }
            Ok(self.snapshot)
        }
    }

    struct FixedTraffic {
        snapshot: TrafficSnapshot,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl TrafficProvider for FixedTraffic {
        async fn current_traffic(&self, _city: &str) -> Result<TrafficSnapshot, ConditionsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.snapshot)
        }
    }

    struct Counters {
        geocoder: Arc<AtomicUsize>,
        air_quality: Arc<AtomicUsize>,
        traffic: Arc<AtomicUsize>,
    }

    const VASAI: Coordinates = Coordinates {
        latitude: 19.3428,
        longitude: 72.8055,
    };

    const MODERATE_SNAPSHOT: AirQualitySnapshot = AirQualitySnapshot {
        european_aqi: Some(55.0),
        pm2_5: Some(35.4),
        pm10: Some(58.1),
        ozone: Some(41.0),
        nitrogen_dioxide: Some(22.7),
    };

    fn assistant(
        geocode_result: Option<Coordinates>,
        geocode_fail: bool,
        snapshot: AirQualitySnapshot,
        air_quality_fail: bool,
    ) -> (Assistant, Counters) {
        let counters = Counters {
            geocoder: Arc::new(AtomicUsize::new(0)),
            air_quality: Arc::new(AtomicUsize::new(0)),
            traffic: Arc::new(AtomicUsize::new(0)),
        };
        let assistant = Assistant::new(
            Box::new(StubGeocoder {
                result: geocode_result,
                fail: geocode_fail,
                calls: Arc::clone(&counters.geocoder),
            }),
            Box::new(StubAirQuality {
                snapshot,
                fail: air_quality_fail,
                calls: Arc::clone(&counters.air_quality),
            }),
            Box::new(FixedTraffic {
                snapshot: TrafficSnapshot {
                    congestion: CongestionLevel::Heavy,
                    congestion_percent: 74.0,
                    average_speed_mph: 18.0,
                },
                calls: Arc::clone(&counters.traffic),
            }),
        );
        (assistant, counters)
    }

    #[tokio::test]
    async fn unknown_intent_makes_no_collaborator_calls() {
        let (assistant, counters) = assistant(Some(VASAI), false, MODERATE_SNAPSHOT, false);

        let text = assistant.respond("hello there").await;

        assert_eq!(text, reply::UNKNOWN_INTENT_REPLY);
        assert_eq!(counters.geocoder.load(Ordering::SeqCst), 0);
        assert_eq!(counters.air_quality.load(Ordering::SeqCst), 0);
        assert_eq!(counters.traffic.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn air_quality_query_reports_known_city() {
        let (assistant, _) = assistant(Some(VASAI), false, MODERATE_SNAPSHOT, false);

        let text = assistant.respond("What's the air quality in Vasai West?").await;

        assert!(text.contains("Air quality in Vasai West is Moderate (AQI 55.0)."));
        assert!(text.contains("PM2.5: 35.4 µg/m³"));
    }

    #[tokio::test]
    async fn air_quality_path_is_deterministic_with_fixed_collaborators() {
        let (assistant, _) = assistant(Some(VASAI), false, MODERATE_SNAPSHOT, false);

        let first = assistant.respond("What's the air quality in Vasai West?").await;
        let second = assistant.respond("What's the air quality in Vasai West?").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn air_quality_wins_when_both_keyword_sets_match() {
        let (assistant, counters) = assistant(Some(VASAI), false, MODERATE_SNAPSHOT, false);

        let text = assistant
            .respond("Does traffic affect air quality in Mumbai?")
            .await;

        assert!(text.contains("Air quality in Mumbai"));
        assert_eq!(counters.traffic.load(Ordering::SeqCst), 0);
        assert_eq!(counters.geocoder.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_geocode_result_skips_conditions_fetch() {
        let (assistant, counters) = assistant(None, false, MODERATE_SNAPSHOT, false);

        let text = assistant.respond("What's the aqi near Narnia?").await;

        assert!(text.contains("couldn't find information for Narnia"));
        assert_eq!(counters.air_quality.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn geocode_failure_uses_not_found_apology() {
        let (assistant, counters) = assistant(None, true, MODERATE_SNAPSHOT, false);

        let text = assistant.respond("What's the aqi near Narnia?").await;

        assert!(text.contains("couldn't find information for Narnia"));
        assert_eq!(counters.air_quality.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn conditions_failure_uses_retrieve_apology() {
        let (assistant, _) = assistant(Some(VASAI), false, MODERATE_SNAPSHOT, true);

        let text = assistant.respond("How's the pollution in Thane?").await;

        assert!(text.contains("couldn't retrieve current air quality data for Thane"));
    }

    #[tokio::test]
    async fn snapshot_without_aqi_uses_retrieve_apology() {
        let snapshot = AirQualitySnapshot {
            european_aqi: None,
            ..MODERATE_SNAPSHOT
        };
        let (assistant, _) = assistant(Some(VASAI), false, snapshot, false);

        let text = assistant.respond("How's the pollution in Thane?").await;

        assert!(text.contains("couldn't retrieve current air quality data for Thane"));
    }

    #[tokio::test]
    async fn traffic_query_skips_geocoding() {
        let (assistant, counters) = assistant(Some(VASAI), false, MODERATE_SNAPSHOT, false);

        let text = assistant
            .respond("Tell me about traffic conditions in Narnia")
            .await;

        assert!(text.contains("Traffic in Narnia is currently heavy"));
        assert!(text.contains("alternate routes"));
        assert_eq!(counters.geocoder.load(Ordering::SeqCst), 0);
        assert_eq!(counters.air_quality.load(Ordering::SeqCst), 0);
        assert_eq!(counters.traffic.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn synthesized_traffic_reply_has_the_documented_shape() {
        let assistant = Assistant::new(
            Box::new(StubGeocoder {
                result: None,
                fail: false,
                calls: Arc::new(AtomicUsize::new(0)),
            }),
            Box::new(StubAirQuality {
                snapshot: MODERATE_SNAPSHOT,
                fail: false,
                calls: Arc::new(AtomicUsize::new(0)),
            }),
            Box::new(collaborators::SyntheticTraffic),
        );

        let text = assistant
            .respond("Tell me about traffic conditions in Narnia")
            .await;

        assert!(text.contains("Traffic in Narnia is currently"));
        assert!(
            CongestionLevel::ALL
                .iter()
                .any(|level| text.contains(&level.to_string())),
            "No congestion level in reply: {text}"
        );
    }
}
