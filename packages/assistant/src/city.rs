//! City name extraction from free-text queries.
//!
//! Layered heuristics, strict priority order, first hit wins:
//!
//! 1. Known-city substring scan (case-insensitive against the raw query).
//! 2. Preposition capture: "in/at/for/near X".
//! 3. Place-suffix capture: "X city/area/region".
//! 4. Last capitalized word in the original query.
//! 5. Fixed fallback city.
//!
//! The priority order is the product contract — a query naming two known
//! cities, or a known city plus a preposition, resolves to whichever the
//! earlier branch finds first. No merging.

use regex::Regex;
use std::sync::LazyLock;

/// Municipalities the dashboard ships data for, scanned as substrings.
///
/// Multi-word names precede their prefixes ("vasai west" before "vasai")
/// so the longer match wins.
const KNOWN_CITIES: &[&str] = &[
    "vasai west",
    "vasai",
    "virar",
    "nalasopara",
    "mira road",
    "navi mumbai",
    "mumbai",
    "thane",
    "pune",
    "nashik",
    "delhi",
    "bangalore",
    "hyderabad",
    "chennai",
    "kolkata",
];

/// Fallback when no heuristic produces a city.
pub const DEFAULT_CITY: &str = "Vasai West";

/// Regex capturing the word after "in"/"at"/"for"/"near", stopping at
/// whitespace or sentence punctuation.
static PREPOSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:in|at|for|near)\s+([^\s?.!,]+)").expect("valid regex")
});

/// Regex capturing the word before "city"/"area"/"region".
static PLACE_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([a-z]+)\s+(?:city|area|region)\b").expect("valid regex"));

/// Regex for capitalized words in the original (not lower-cased) query.
static CAPITALIZED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+\b").expect("valid regex"));

/// Extracts the city a query is asking about.
///
/// Always produces a name; the fallback is [`DEFAULT_CITY`].
#[must_use]
pub fn extract_city(query: &str) -> String {
    let lower = query.to_lowercase();

    if let Some(city) = KNOWN_CITIES.iter().find(|c| lower.contains(*c)) {
        return title_case(city);
    }

    if let Some(caps) = PREPOSITION_RE.captures(query) {
        return caps[1].trim().to_string();
    }

    if let Some(caps) = PLACE_SUFFIX_RE.captures(query) {
        return caps[1].trim().to_string();
    }

    if let Some(word) = CAPITALIZED_RE.find_iter(query).last() {
        return word.as_str().to_string();
    }

    DEFAULT_CITY.to_string()
}

/// Capitalizes the first letter of each whitespace-separated word.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_city_matches_with_title_case() {
        assert_eq!(
            extract_city("What's the air quality in Vasai West?"),
            "Vasai West"
        );
        assert_eq!(extract_city("aqi for navi mumbai please"), "Navi Mumbai");
    }

    #[test]
    fn known_city_wins_over_later_heuristics() {
        // Preposition and capitalization would both fire here; the
        // known-city scan runs first.
        assert_eq!(extract_city("Is the pollution bad near Thane?"), "Thane");
    }

    #[test]
    fn longer_known_name_wins_over_its_prefix() {
        assert_eq!(extract_city("pollution in vasai west today"), "Vasai West");
    }

    #[test]
    fn preposition_captures_unknown_city() {
        assert_eq!(
            extract_city("Tell me about traffic conditions in Narnia"),
            "Narnia"
        );
        assert_eq!(extract_city("what's the aqi near Springfield?"), "Springfield");
    }

    #[test]
    fn place_suffix_captures_preceding_word() {
        assert_eq!(extract_city("Is Panvel city congested?"), "Panvel");
    }

    #[test]
    fn last_capitalized_word_is_the_fallback_heuristic() {
        assert_eq!(
            extract_city("Does Hogsmeade have pollution problems"),
            "Hogsmeade"
        );
    }

    #[test]
    fn default_city_when_nothing_matches() {
        assert_eq!(extract_city("what is the aqi today?"), DEFAULT_CITY);
    }
}
