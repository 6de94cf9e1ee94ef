// Declare submodules
mod compact;
mod verbose;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::transit;

/// Closed set of instruction-template categories. Anything else resolves to
/// `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptCategory {
    PublicTransport,
    MuseumExhibit,
    RestaurantMenu,
    CulturalCustoms,
    EmergencySafety,
    CurrencyExchange,
    General,
}

impl PromptCategory {
    pub const ALL: [PromptCategory; 7] = [
        PromptCategory::PublicTransport,
        PromptCategory::MuseumExhibit,
        PromptCategory::RestaurantMenu,
        PromptCategory::CulturalCustoms,
        PromptCategory::EmergencySafety,
        PromptCategory::CurrencyExchange,
        PromptCategory::General,
    ];

    /// Resolve a wire key. Missing or unrecognized keys fall back to the
    /// general category rather than failing.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("public_transport") => PromptCategory::PublicTransport,
            Some("museum_exhibit") => PromptCategory::MuseumExhibit,
            Some("restaurant_menu") => PromptCategory::RestaurantMenu,
            Some("cultural_customs") => PromptCategory::CulturalCustoms,
            Some("emergency_safety") => PromptCategory::EmergencySafety,
            Some("currency_exchange") => PromptCategory::CurrencyExchange,
            _ => PromptCategory::General,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PromptCategory::PublicTransport => "public_transport",
            PromptCategory::MuseumExhibit => "museum_exhibit",
            PromptCategory::RestaurantMenu => "restaurant_menu",
            PromptCategory::CulturalCustoms => "cultural_customs",
            PromptCategory::EmergencySafety => "emergency_safety",
            PromptCategory::CurrencyExchange => "currency_exchange",
            PromptCategory::General => "general",
        }
    }
}

/// Template dialect. One dialect is chosen per deployment via configuration;
/// the registry never mixes them within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptDialect {
    /// Long instructional templates with numbered simplification rules.
    #[default]
    Verbose,
    /// Word-limited emoji-tagged templates intended to cut model token usage.
    Compact,
}

impl FromStr for PromptDialect {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(PromptDialect::Verbose),
            "compact" => Ok(PromptDialect::Compact),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PromptDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptDialect::Verbose => write!(f, "verbose"),
            PromptDialect::Compact => write!(f, "compact"),
        }
    }
}

/// Render the simplification prompt for a category, embedding the caller's
/// text verbatim in the template's single slot.
pub fn simplification_prompt(
    dialect: PromptDialect,
    category: PromptCategory,
    complex_text: &str,
) -> String {
    match dialect {
        PromptDialect::Verbose => verbose::render(category, complex_text),
        PromptDialect::Compact => compact::render(category, complex_text),
    }
}

/// Prompt asking the model to compare the formatted mock routes, with the
/// directions link embedded so it survives into the answer.
pub fn transport_prompt(origin: &str, destination: &str, routes_data: &str) -> String {
    let maps_link = transit::google_maps_link(origin, destination);

    format!(
        "You are TravelBuddy. Give SHORT, PRECISE transport info for tourists.

From: {origin} → To: {destination}

Available routes:
{routes_data}

Format as:
🚇 Quick Routes to {destination}

1️⃣ [Route Name] - [Duration] - [Cost]
• [Transport type] • [Departure] → [Arrival]
• Status: [On time/Delayed] • Platform: [Number]
• [One helpful tip or note]

2️⃣ [Route Name] - [Duration] - [Cost]
• [Transport type] • [Departure] → [Arrival]
• Status: [On time/Delayed] • Platform: [Number]
• [One helpful tip or note]

🚨 Alerts: [Only if delays/changes exist]

🗺️ {maps_link}

Each option: 50 words max. Focus on essential info only."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "The Metropolitan Transit Authority operates a complex network.";

    #[test]
    fn every_category_embeds_input_verbatim_verbose() {
        for category in PromptCategory::ALL {
            let prompt = simplification_prompt(PromptDialect::Verbose, category, INPUT);
            assert!(
                prompt.contains(INPUT),
                "verbose {} does not embed the input",
                category.key()
            );
        }
    }

    #[test]
    fn every_category_embeds_input_verbatim_compact() {
        for category in PromptCategory::ALL {
            let prompt = simplification_prompt(PromptDialect::Compact, category, INPUT);
            assert!(
                prompt.contains(INPUT),
                "compact {} does not embed the input",
                category.key()
            );
        }
    }

    #[test]
    fn unknown_key_falls_back_to_general() {
        assert_eq!(
            PromptCategory::from_key(Some("weather_forecast")),
            PromptCategory::General
        );
        assert_eq!(PromptCategory::from_key(None), PromptCategory::General);

        let fallback = simplification_prompt(
            PromptDialect::Verbose,
            PromptCategory::from_key(Some("weather_forecast")),
            INPUT,
        );
        let general =
            simplification_prompt(PromptDialect::Verbose, PromptCategory::General, INPUT);
        assert_eq!(fallback, general);
    }

    #[test]
    fn categories_render_distinct_templates() {
        let transport = simplification_prompt(
            PromptDialect::Verbose,
            PromptCategory::PublicTransport,
            INPUT,
        );
        let museum =
            simplification_prompt(PromptDialect::Verbose, PromptCategory::MuseumExhibit, INPUT);
        assert_ne!(transport, museum);
    }

    #[test]
    fn dialects_render_differently() {
        let verbose =
            simplification_prompt(PromptDialect::Verbose, PromptCategory::General, INPUT);
        let compact =
            simplification_prompt(PromptDialect::Compact, PromptCategory::General, INPUT);
        assert_ne!(verbose, compact);
        assert!(compact.contains("Keep under"));
    }

    #[test]
    fn transport_prompt_embeds_routes_and_link() {
        let prompt = transport_prompt("Times Square", "Central Park", "OPTION 1: Express Bus");
        assert!(prompt.contains("OPTION 1: Express Bus"));
        assert!(prompt.contains("https://www.google.com/maps/dir/Times%20Square/Central%20Park"));
        assert!(prompt.contains("Quick Routes to Central Park"));
    }

    #[test]
    fn dialect_parses_from_config_strings() {
        assert_eq!("compact".parse(), Ok(PromptDialect::Compact));
        assert_eq!("Verbose".parse(), Ok(PromptDialect::Verbose));
        assert_eq!("terse".parse::<PromptDialect>(), Err(()));
    }
}
