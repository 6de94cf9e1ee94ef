use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/simplify`. The web client sends camelCase keys.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifyRequest {
    #[serde(default)]
    pub user_input: Option<String>,
    /// Category key selecting the instruction template. Missing or
    /// unrecognized values fall back to the general template.
    #[serde(default)]
    pub prompt_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifyResponse {
    pub result: String,
    pub original_length: usize,
    pub simplified_length: usize,
    /// Signed percentage decrease in character count, rounded to an integer.
    pub reduction: i64,
}

/// Percentage reduction between input and output lengths. Guards the
/// zero-length input case so the result is never NaN or infinite.
pub fn reduction_percent(original_length: usize, simplified_length: usize) -> i64 {
    if original_length == 0 {
        return 0;
    }
    let original = original_length as f64;
    let simplified = simplified_length as f64;
    ((original - simplified) / original * 100.0).round() as i64
}

/// Body of `POST /api/transport`. Preferences are accepted but never
/// enforced; the mock data source ignores them.
#[derive(Debug, Deserialize)]
pub struct TransportRequest {
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub preferences: Option<TransportPreferences>,
}

#[derive(Debug, Deserialize)]
pub struct TransportPreferences {
    pub transport_types: Option<Vec<String>>,
    pub max_duration: Option<u32>,
    pub max_cost: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Bus,
    Train,
    Subway,
}

impl TransportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Bus => "bus",
            TransportType::Train => "train",
            TransportType::Subway => "subway",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteStatus {
    #[serde(rename = "On Time")]
    OnTime,
    Delayed,
}

impl RouteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStatus::OnTime => "On Time",
            RouteStatus::Delayed => "Delayed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrowdingLevel {
    Low,
    Medium,
    High,
}

impl CrowdingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrowdingLevel::Low => "Low",
            CrowdingLevel::Medium => "Medium",
            CrowdingLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealTimeInfo {
    pub crowding_level: CrowdingLevel,
    pub next_departure: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_minutes: Option<u32>,
}

/// One synthetic transit option, fabricated fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportRoute {
    pub route_id: String,
    pub route_name: String,
    pub transport_type: TransportType,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub status: RouteStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_time_info: Option<RealTimeInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAlert {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub route: String,
    pub message: String,
    pub severity: String,
    pub affected_stops: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TransportMetadata {
    pub origin: String,
    pub destination: String,
    pub timestamp: DateTime<Utc>,
    pub route_count: usize,
}

#[derive(Debug, Serialize)]
pub struct TransportResponse {
    pub success: bool,
    pub simplified_text: String,
    pub raw_routes: Vec<TransportRoute>,
    pub service_alerts: Vec<ServiceAlert>,
    pub metadata: TransportMetadata,
}

// Gemini generateContent request format
#[derive(Debug, Serialize, Clone)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

impl GeminiRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiPart {
    pub text: String,
}

// Gemini generateContent response format
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContent,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_baseline() {
        assert_eq!(reduction_percent(100, 40), 60);
    }

    #[test]
    fn reduction_zero_length_input_is_guarded() {
        assert_eq!(reduction_percent(0, 500), 0);
    }

    #[test]
    fn reduction_can_be_negative_when_output_grows() {
        assert_eq!(reduction_percent(100, 150), -50);
    }

    #[test]
    fn gemini_response_text_extraction() {
        let raw = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "Take " }, { "text": "the bus." } ] } }
            ]
        }"#;
        let response: GeminiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text().as_deref(), Some("Take the bus."));
    }

    #[test]
    fn gemini_response_without_candidates_yields_none() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn transport_route_serializes_wire_names() {
        let route = TransportRoute {
            route_id: "101".to_string(),
            route_name: "Express Bus 101".to_string(),
            transport_type: TransportType::Bus,
            destination: "Downtown".to_string(),
            departure_time: "10:05".to_string(),
            arrival_time: "10:25".to_string(),
            duration: "20 minutes".to_string(),
            cost: Some("$2.50".to_string()),
            platform: Some("Platform 3".to_string()),
            status: RouteStatus::OnTime,
            real_time_info: None,
        };
        let value = serde_json::to_value(&route).unwrap();
        assert_eq!(value["transport_type"], "bus");
        assert_eq!(value["status"], "On Time");
        assert!(value.get("real_time_info").is_none());
    }

    #[test]
    fn simplify_request_accepts_camel_case() {
        let request: SimplifyRequest =
            serde_json::from_str(r#"{"userInput":"hello","promptType":"museum_exhibit"}"#).unwrap();
        assert_eq!(request.user_input.as_deref(), Some("hello"));
        assert_eq!(request.prompt_type.as_deref(), Some("museum_exhibit"));
    }
}
