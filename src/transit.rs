//! Mock transport data source. Demonstration data only: the contract is the
//! shape (field set, ordering, minute offsets), computed fresh from the
//! supplied instant and never persisted.

use chrono::{DateTime, Duration, Local};

use crate::models::{
    CrowdingLevel, RealTimeInfo, RouteStatus, ServiceAlert, TransportRoute, TransportType,
};

fn clock(now: DateTime<Local>, minutes: i64) -> String {
    (now + Duration::minutes(minutes)).format("%H:%M").to_string()
}

/// Three synthetic routes in fixed presentation order. The origin is part of
/// the contract but does not shape the data; destinations echo the caller.
pub fn mock_routes(_origin: &str, destination: &str, now: DateTime<Local>) -> Vec<TransportRoute> {
    vec![
        TransportRoute {
            route_id: "101".to_string(),
            route_name: "Express Bus 101".to_string(),
            transport_type: TransportType::Bus,
            destination: destination.to_string(),
            departure_time: clock(now, 5),
            arrival_time: clock(now, 25),
            duration: "20 minutes".to_string(),
            cost: Some("$2.50".to_string()),
            platform: Some("Platform 3".to_string()),
            status: RouteStatus::OnTime,
            real_time_info: Some(RealTimeInfo {
                crowding_level: CrowdingLevel::Medium,
                next_departure: clock(now, 5),
                delay_minutes: None,
            }),
        },
        TransportRoute {
            route_id: "A".to_string(),
            route_name: "Train Line A".to_string(),
            transport_type: TransportType::Train,
            destination: destination.to_string(),
            departure_time: clock(now, 8),
            arrival_time: clock(now, 18),
            duration: "10 minutes".to_string(),
            cost: Some("$3.75".to_string()),
            platform: Some("Platform 1".to_string()),
            status: RouteStatus::Delayed,
            real_time_info: Some(RealTimeInfo {
                crowding_level: CrowdingLevel::Low,
                next_departure: clock(now, 8),
                delay_minutes: Some(3),
            }),
        },
        TransportRoute {
            route_id: "1".to_string(),
            route_name: "Subway Line 1".to_string(),
            transport_type: TransportType::Subway,
            destination: destination.to_string(),
            departure_time: clock(now, 2),
            arrival_time: clock(now, 22),
            duration: "20 minutes".to_string(),
            cost: Some("$2.00".to_string()),
            platform: Some("Platform 2".to_string()),
            status: RouteStatus::OnTime,
            real_time_info: Some(RealTimeInfo {
                crowding_level: CrowdingLevel::High,
                next_departure: clock(now, 2),
                delay_minutes: None,
            }),
        },
    ]
}

/// Fixed, static alert list.
pub fn service_alerts() -> Vec<ServiceAlert> {
    vec![
        ServiceAlert {
            alert_type: "Delay".to_string(),
            route: "Train Line A".to_string(),
            message: "Train Line A is running 3 minutes late due to signal issues".to_string(),
            severity: "Medium".to_string(),
            affected_stops: vec!["Central Station".to_string(), "Downtown".to_string()],
        },
        ServiceAlert {
            alert_type: "Service Change".to_string(),
            route: "Bus 102".to_string(),
            message: "Bus 102 will not stop at Main Street Station today due to construction"
                .to_string(),
            severity: "High".to_string(),
            affected_stops: vec!["Main Street Station".to_string()],
        },
    ]
}

/// Human-readable stanza per route, fed into the transport prompt's
/// `{routes_data}` slot.
pub fn format_routes(routes: &[TransportRoute]) -> String {
    routes
        .iter()
        .enumerate()
        .map(|(index, route)| {
            format!(
                "\nOPTION {number}: {name}\n\
                 • Type: {transport_type}\n\
                 • Route: {route_id}\n\
                 • Departure: {departure}\n\
                 • Arrival: {arrival}\n\
                 • Duration: {duration}\n\
                 • Cost: {cost}\n\
                 • Status: {status}\n\
                 • Platform: {platform}\n\
                 • Crowding: {crowding}\n",
                number = index + 1,
                name = route.route_name,
                transport_type = route.transport_type.as_str().to_uppercase(),
                route_id = route.route_id,
                departure = route.departure_time,
                arrival = route.arrival_time,
                duration = route.duration,
                cost = route.cost.as_deref().unwrap_or("Unknown"),
                status = route.status.as_str(),
                platform = route.platform.as_deref().unwrap_or("Unknown"),
                crowding = route
                    .real_time_info
                    .as_ref()
                    .map(|info| info.crowding_level.as_str())
                    .unwrap_or("Unknown"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Directions link with origin and destination percent-encoded into the fixed
/// pattern.
pub fn google_maps_link(origin: &str, destination: &str) -> String {
    format!(
        "https://www.google.com/maps/dir/{}/{}/data=!3m1!4b1!4m2!4m1!3e3",
        urlencoding::encode(origin),
        urlencoding::encode(destination)
    )
}
