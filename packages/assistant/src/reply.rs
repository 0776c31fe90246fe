//! Reply templating and apology strings.
//!
//! Every user-visible sentence the router can produce lives here. The
//! apology strings are part of the product contract: failures always
//! degrade to one of these, never to a raw error.

use urban_pulse_conditions_models::{AirQualitySnapshot, TrafficSnapshot};

/// Fixed reply for queries outside the assistant's two intents.
pub const UNKNOWN_INTENT_REPLY: &str = "I'm not sure how to answer that. I can help with air \
     quality and traffic conditions - try asking about the air quality or traffic in a specific \
     city.";

/// Maps a European AQI value to its descriptive label.
///
/// Thresholds follow the European scale: 20/40/60/80/100.
#[must_use]
pub fn aqi_label(aqi: f64) -> &'static str {
    if aqi <= 20.0 {
        "Good"
    } else if aqi <= 40.0 {
        "Fair"
    } else if aqi <= 60.0 {
        "Moderate"
    } else if aqi <= 80.0 {
        "Poor"
    } else if aqi <= 100.0 {
        "Very Poor"
    } else {
        "Hazardous"
    }
}

/// Maps a European AQI value to an activity recommendation.
#[must_use]
pub fn aqi_recommendation(aqi: f64) -> &'static str {
    if aqi <= 40.0 {
        "It's safe for outdoor activities."
    } else if aqi <= 60.0 {
        "Consider reducing prolonged outdoor activity if you're sensitive to pollution."
    } else if aqi <= 80.0 {
        "People with respiratory issues should limit outdoor activity."
    } else {
        "Everyone should reduce outdoor activity and consider wearing a mask outside."
    }
}

/// Composes the multi-line air-quality report for a city.
#[must_use]
pub fn air_quality_reply(city: &str, aqi: f64, snapshot: &AirQualitySnapshot) -> String {
    format!(
        "Air quality in {city} is {label} (AQI {aqi:.1}).\n\
         PM2.5: {pm2_5}\n\
         PM10: {pm10}\n\
         Ozone: {ozone}\n\
         NO2: {no2}\n\
         {recommendation}",
        label = aqi_label(aqi),
        pm2_5 = concentration(snapshot.pm2_5),
        pm10 = concentration(snapshot.pm10),
        ozone = concentration(snapshot.ozone),
        no2 = concentration(snapshot.nitrogen_dioxide),
        recommendation = aqi_recommendation(aqi),
    )
}

/// Composes the traffic report for a city.
#[must_use]
pub fn traffic_reply(city: &str, snapshot: &TrafficSnapshot) -> String {
    let remark = if snapshot.congestion.is_severe() {
        "Consider taking alternate routes if you can."
    } else {
        "Roads are flowing well."
    };

    format!(
        "Traffic in {city} is currently {level} with {percent:.0}% congestion and an average \
         speed of {speed:.0} mph. {remark}",
        level = snapshot.congestion,
        percent = snapshot.congestion_percent,
        speed = snapshot.average_speed_mph,
    )
}

/// Apology when geocoding fails or finds nothing.
#[must_use]
pub fn geocode_apology(city: &str) -> String {
    format!("Sorry, I couldn't find information for {city}. Could you try asking about a different city?")
}

/// Apology when the air-quality fetch fails or has no current data.
#[must_use]
pub fn air_quality_apology(city: &str) -> String {
    format!(
        "Sorry, I couldn't retrieve current air quality data for {city} right now. Please try \
         again in a few minutes."
    )
}

/// Apology when the traffic lookup fails.
#[must_use]
pub fn traffic_apology(city: &str) -> String {
    format!(
        "Sorry, I couldn't retrieve current traffic data for {city} right now. Please try again \
         in a few minutes."
    )
}

/// Renders an optional µg/m³ concentration to one decimal place.
fn concentration(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1} µg/m³"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use urban_pulse_conditions_models::CongestionLevel;

    #[test]
    fn aqi_labels_follow_european_thresholds() {
        assert_eq!(aqi_label(0.0), "Good");
        assert_eq!(aqi_label(20.0), "Good");
        assert_eq!(aqi_label(20.1), "Fair");
        assert_eq!(aqi_label(40.0), "Fair");
        assert_eq!(aqi_label(60.0), "Moderate");
        assert_eq!(aqi_label(80.0), "Poor");
        assert_eq!(aqi_label(100.0), "Very Poor");
        assert_eq!(aqi_label(100.1), "Hazardous");
    }

    #[test]
    fn recommendations_follow_thresholds() {
        assert!(aqi_recommendation(40.0).contains("safe"));
        assert!(aqi_recommendation(60.0).contains("sensitive"));
        assert!(aqi_recommendation(80.0).contains("respiratory"));
        assert!(aqi_recommendation(120.0).contains("mask"));
    }

    #[test]
    fn air_quality_reply_rounds_to_one_decimal() {
        let snapshot = AirQualitySnapshot {
            european_aqi: Some(55.0),
            pm2_5: Some(35.44),
            pm10: Some(58.16),
            ozone: Some(41.0),
            nitrogen_dioxide: None,
        };
        let text = air_quality_reply("Thane", 55.0, &snapshot);
        assert!(text.contains("Air quality in Thane is Moderate (AQI 55.0)."));
        assert!(text.contains("PM2.5: 35.4 µg/m³"));
        assert!(text.contains("PM10: 58.2 µg/m³"));
        assert!(text.contains("NO2: n/a"));
        assert!(text.contains("sensitive"));
    }

    #[test]
    fn severe_traffic_suggests_alternate_routes() {
        let snapshot = TrafficSnapshot {
            congestion: CongestionLevel::Congested,
            congestion_percent: 91.0,
            average_speed_mph: 12.0,
        };
        let text = traffic_reply("Virar", &snapshot);
        assert!(text.contains("Traffic in Virar is currently congested"));
        assert!(text.contains("alternate routes"));
    }

    #[test]
    fn light_traffic_reports_flowing_roads() {
        let snapshot = TrafficSnapshot {
            congestion: CongestionLevel::Light,
            congestion_percent: 24.0,
            average_speed_mph: 44.0,
        };
        assert!(traffic_reply("Pune", &snapshot).contains("flowing well"));
    }
}
