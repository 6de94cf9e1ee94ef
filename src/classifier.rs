//! Heuristics the chat front end uses to route free-form input: a broad
//! keyword check for "is this a transport question", and best-effort
//! origin/destination extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Intentionally broad keyword list; false positives on words like "to" are
/// accepted behavior.
const TRANSPORT_KEYWORDS: [&str; 17] = [
    "how do i get",
    "transport",
    "bus",
    "train",
    "subway",
    "metro",
    "route",
    "directions",
    "from",
    "to",
    "airport",
    "station",
    "stop",
    "public transport",
    "transit",
    "commute",
    "travel between",
];

// Captures run to a comma, newline, period, or end of input so multi-word
// locations survive intact.
static FROM_TO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)from\s+([^,\n]+?)\s+to\s+([^,\n]+?)(?:[.,\n]|$)").unwrap());
static BETWEEN_AND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)between\s+([^,\n]+?)\s+and\s+([^,\n]+?)(?:[.,\n]|$)").unwrap());
static BARE_TO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([^,\n]+?)\s+to\s+([^,\n]+?)(?:[.,\n]|$)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedLocations {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

pub fn is_transport_query(text: &str) -> bool {
    let lower = text.to_lowercase();
    TRANSPORT_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

/// Try the three patterns in strict priority order against the original-case
/// text: "from X to Y", then "between X and Y", then bare "X to Y". The
/// "from...to" form wins because the bare "to" pattern false-positives on
/// unrelated sentences.
pub fn extract_locations(text: &str) -> ExtractedLocations {
    for (pattern, guarded) in [(&*FROM_TO, false), (&*BETWEEN_AND, false), (&*BARE_TO, true)] {
        if let Some(captures) = pattern.captures(text) {
            let origin = captures[1].trim().to_string();
            let destination = captures[2].trim().to_string();

            // The bare fallback only accepts location-like captures, so
            // sentences like "I like to travel" extract nothing.
            if guarded && !(looks_like_location(&origin) && looks_like_location(&destination)) {
                continue;
            }

            return ExtractedLocations {
                origin: Some(origin),
                destination: Some(destination),
            };
        }
    }

    ExtractedLocations::default()
}

fn looks_like_location(candidate: &str) -> bool {
    candidate
        .chars()
        .next()
        .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_query_detection() {
        assert!(is_transport_query("How do I get from JFK to Manhattan?"));
        assert!(is_transport_query("What is the nearest SUBWAY station?"));
        assert!(!is_transport_query("Tell me about the Mona Lisa"));
    }

    #[test]
    fn from_to_pattern_wins() {
        let locations =
            extract_locations("Route from Brooklyn Bridge to Empire State Building");
        assert_eq!(locations.origin.as_deref(), Some("Brooklyn Bridge"));
        assert_eq!(locations.destination.as_deref(), Some("Empire State Building"));
    }

    #[test]
    fn between_and_pattern_fires_second() {
        let locations = extract_locations("between Central Park and Times Square");
        assert_eq!(locations.origin.as_deref(), Some("Central Park"));
        assert_eq!(locations.destination.as_deref(), Some("Times Square"));
    }

    #[test]
    fn bare_to_pattern_accepts_location_like_captures() {
        let locations = extract_locations("Times Square to Central Park");
        assert_eq!(locations.origin.as_deref(), Some("Times Square"));
        assert_eq!(locations.destination.as_deref(), Some("Central Park"));
    }

    #[test]
    fn bare_to_pattern_rejects_plain_sentences() {
        let locations = extract_locations("I like to travel");
        assert_eq!(locations.origin, None);
        assert_eq!(locations.destination, None);
    }

    #[test]
    fn no_pattern_yields_nothing() {
        let locations = extract_locations("What museums are open today");
        assert_eq!(locations, ExtractedLocations::default());
    }

    #[test]
    fn captures_stop_at_commas() {
        let locations = extract_locations("from JFK Airport to Manhattan, ideally by train");
        assert_eq!(locations.origin.as_deref(), Some("JFK Airport"));
        assert_eq!(locations.destination.as_deref(), Some("Manhattan"));
    }
}
