//! Keyword-based intent classification.
//!
//! The assistant answers two kinds of question. Classification is a fixed
//! keyword scan over the lower-cased query: air quality is checked first,
//! so a query mentioning both topics gets an air-quality answer
//! (first-match-wins is the product contract, not best-match).

use urban_pulse_assistant_models::Intent;

/// Keywords that select the air-quality handler.
pub const AIR_QUALITY_KEYWORDS: &[&str] = &["air quality", "pollution", "aqi", "pm2.5", "pm10"];

/// Keywords that select the traffic handler.
pub const TRAFFIC_KEYWORDS: &[&str] = &["traffic", "congestion", "road", "route", "highway"];

/// Classifies a query into one of the assistant's intents.
#[must_use]
pub fn classify(query: &str) -> Intent {
    let lower = query.to_lowercase();

    if AIR_QUALITY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Intent::AirQuality
    } else if TRAFFIC_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Intent::Traffic
    } else {
        Intent::Unknown
    }
}
