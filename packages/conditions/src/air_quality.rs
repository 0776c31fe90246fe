//! Open-Meteo air-quality client.
//!
//! Fetches a single current snapshot (European AQI plus the pollutants the
//! assistant reports). Open-Meteo requires no API key and has generous
//! rate limits for non-commercial use.
//!
//! See <https://open-meteo.com/en/docs/air-quality-api>

use urban_pulse_conditions_models::{AirQualitySnapshot, Coordinates};

use crate::ConditionsError;

/// The `current` fields requested from Open-Meteo, in response order.
const CURRENT_FIELDS: &str = "european_aqi,pm2_5,pm10,ozone,nitrogen_dioxide";

/// Fetches the current air-quality snapshot for a coordinate pair.
///
/// # Errors
///
/// Returns [`ConditionsError`] if the HTTP request fails, the body is not
/// valid JSON, or the response has no `current` object.
pub async fn fetch_current(
    client: &reqwest::Client,
    base_url: &str,
    coordinates: Coordinates,
) -> Result<AirQualitySnapshot, ConditionsError> {
    log::debug!(
        "Fetching air quality for ({}, {}) via {base_url}",
        coordinates.latitude,
        coordinates.longitude
    );

    let resp = client
        .get(base_url)
        .query(&[
            ("latitude", coordinates.latitude.to_string()),
            ("longitude", coordinates.longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
        ])
        .send()
        .await?;

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body)
}

/// Parses an Open-Meteo air-quality response body.
///
/// Individual pollutant fields may be absent or null when the upstream
/// model has no value for the location; those become `None`. A missing
/// `current` object is an error — there is nothing to report.
fn parse_response(body: &serde_json::Value) -> Result<AirQualitySnapshot, ConditionsError> {
    let current = body.get("current").ok_or(ConditionsError::MissingCurrent)?;

    if !current.is_object() {
        return Err(ConditionsError::Parse {
            message: "Open-Meteo `current` is not an object".to_string(),
        });
    }

    Ok(AirQualitySnapshot {
        european_aqi: current["european_aqi"].as_f64(),
        pm2_5: current["pm2_5"].as_f64(),
        pm10: current["pm10"].as_f64(),
        ozone: current["ozone"].as_f64(),
        nitrogen_dioxide: current["nitrogen_dioxide"].as_f64(),
    })
}
