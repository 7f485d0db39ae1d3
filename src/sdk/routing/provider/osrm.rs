use super::types::{OsrmRoute, OsrmStep, RouteResponse};
use crate::sdk::config::RouterConfig;
use crate::sdk::routing::error::{OsrmErrorPayload, RoutingError};
use crate::sdk::routing::route::{Point, Profile, Route, Step};
use crate::sdk::routing::service::Router;
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Routing client for an OSRM `route/v1` endpoint.
pub struct OsrmRouter {
    client: Client,
    base_url: String,
}

impl OsrmRouter {
    pub fn new(config: &RouterConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `{base}/{profile}/{lon1},{lat1};{lon2},{lat2}`
    pub fn route_url(&self, start: &Point, end: &Point, profile: Profile) -> String {
        format!(
            "{}/{}/{},{};{},{}",
            self.base_url, profile, start.lon, start.lat, end.lon, end.lat
        )
    }
}

impl Router for OsrmRouter {
    fn route(&self, start: &Point, end: &Point, profile: Profile) -> Result<Route, RoutingError> {
        let url = self.route_url(start, end, profile);
        log::debug!(
            "[PROVIDER] Calling OSRM route ({}) for {:?} -> {:?}",
            profile,
            start.coord(),
            end.coord()
        );

        let response = match self
            .client
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson"), ("steps", "true")])
            .send()
        {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Failed to send GET request. URL: {}\nError: {}", url, e);
                return Err(e.into());
            }
        };

        let status = response.status();
        let text = response.text()?;

        parse_route_response(status, &text).map_err(|e| {
            if matches!(e, RoutingError::ParseError(_)) {
                log::error!(
                    "Failed to parse RouteResponse. URL: {}\nError: {}. Body: {}",
                    url,
                    e,
                    text
                );
            }
            e
        })
    }
}

/// Turns an OSRM reply into a [`Route`], using the first route candidate.
///
/// The body is inspected before the HTTP status because OSRM reports its
/// failures (`NoRoute`, `InvalidQuery`, ...) as JSON alongside a 4xx.
pub fn parse_route_response(status: StatusCode, text: &str) -> Result<Route, RoutingError> {
    let response: RouteResponse = match serde_json::from_str(text) {
        Ok(response) => response,
        Err(e) => {
            if status.is_success() {
                return Err(RoutingError::ParseError(e));
            }
            // Try the bare error envelope before giving up on structure
            return Err(match serde_json::from_str::<OsrmErrorPayload>(text) {
                Ok(payload) => RoutingError::ApiError {
                    code: payload.code,
                    message: payload.message.unwrap_or_else(|| "unknown error".to_string()),
                },
                Err(_) => {
                    log::error!(
                        "API returned non-success status: {}. Unparseable Body: {}",
                        status,
                        text
                    );
                    RoutingError::RawApiError(text.to_string())
                }
            });
        }
    };

    if response.code != "Ok" {
        return Err(RoutingError::ApiError {
            code: response.code,
            message: response
                .message
                .unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    if !status.is_success() {
        return Err(RoutingError::HttpStatus {
            status: status.as_u16(),
            body: text.to_string(),
        });
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(RoutingError::NoRoute)?;

    Ok(convert_route(route))
}

fn convert_route(raw: OsrmRoute) -> Route {
    let steps = raw
        .legs
        .into_iter()
        .next()
        .map(|leg| leg.steps)
        .unwrap_or_default()
        .into_iter()
        .map(convert_step)
        .collect();

    Route {
        distance_m: raw.distance,
        duration_s: raw.duration,
        geometry: raw
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| (lon, lat))
            .collect(),
        steps,
    }
}

fn convert_step(raw: OsrmStep) -> Step {
    let road_name = raw.name.trim().to_string();
    let instruction = match raw.maneuver.instruction {
        Some(text) if !text.trim().is_empty() => text,
        _ => describe_maneuver(&raw.maneuver.kind, raw.maneuver.modifier.as_deref(), &road_name),
    };
    let [lon, lat] = raw.maneuver.location;

    Step {
        instruction,
        road_name,
        distance_m: raw.distance,
        duration_s: raw.duration,
        maneuver_location: (lon, lat),
    }
}

/// Builds an English instruction from an OSRM maneuver, for servers that do
/// not ship text instructions themselves.
pub fn describe_maneuver(kind: &str, modifier: Option<&str>, road: &str) -> String {
    let modifier = modifier.map(str::trim).unwrap_or_default();
    let road = road.trim();

    if kind == "arrive" {
        return if road.is_empty() {
            "Arrive at your destination".to_string()
        } else {
            format!("Arrive at your destination on {road}")
        };
    }
    if modifier == "uturn" {
        return with_road("Make a U-turn".to_string(), "onto", road);
    }

    let action = match kind {
        "depart" => return with_road("Head out".to_string(), "on", road),
        "roundabout" | "rotary" | "roundabout turn" => "Enter the roundabout".to_string(),
        "exit roundabout" | "exit rotary" => "Exit the roundabout".to_string(),
        "merge" => phrase("Merge", modifier),
        "on ramp" => phrase("Take the ramp", modifier),
        "off ramp" => phrase("Take the exit", modifier),
        "fork" => phrase("Keep", modifier),
        "turn" | "end of road" => phrase("Turn", modifier),
        "" | "new name" | "continue" | "notification" | "use lane" => phrase("Continue", modifier),
        other => phrase(&capitalize(other), modifier),
    };

    with_road(action, "onto", road)
}

fn phrase(verb: &str, modifier: &str) -> String {
    if modifier.is_empty() {
        verb.to_string()
    } else {
        format!("{verb} {modifier}")
    }
}

fn with_road(action: String, preposition: &str, road: &str) -> String {
    if road.is_empty() {
        action
    } else {
        format!("{action} {preposition} {road}")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const OK_BODY: &str = r#"{
        "code": "Ok",
        "routes": [{
            "distance": 2871.4,
            "duration": 412.9,
            "geometry": {"type": "LineString", "coordinates": [[126.9706, 37.5547], [126.9741, 37.5636], [126.9769, 37.5759]]},
            "legs": [{
                "steps": [
                    {"distance": 120.5, "duration": 30.1, "name": "Tongil-ro",
                     "maneuver": {"type": "depart", "location": [126.9706, 37.5547], "bearing_after": 10}},
                    {"distance": 2750.9, "duration": 382.8, "name": "Sejong-daero",
                     "maneuver": {"type": "turn", "modifier": "right", "location": [126.9741, 37.5636],
                                  "instruction": "Turn right onto Sejong-daero"}},
                    {"distance": 0, "duration": 0, "name": "",
                     "maneuver": {"type": "arrive", "location": [126.9769, 37.5759]}}
                ]
            }]
        }],
        "waypoints": []
    }"#;

    #[test]
    fn parses_first_route_and_first_leg() {
        let route = parse_route_response(StatusCode::OK, OK_BODY).unwrap();

        assert_eq!(route.distance_m, 2871.4);
        assert_eq!(route.duration_s, 412.9);
        assert_eq!(route.geometry.len(), 3);
        assert_eq!(route.geometry[0], (126.9706, 37.5547));
        assert_eq!(route.steps.len(), 3);

        let turn = &route.steps[1];
        assert_eq!(turn.instruction, "Turn right onto Sejong-daero");
        assert_eq!(turn.road_name, "Sejong-daero");
        assert_eq!(turn.maneuver_location, (126.9741, 37.5636));
    }

    #[test]
    fn missing_instructions_are_synthesized() {
        let route = parse_route_response(StatusCode::OK, OK_BODY).unwrap();
        assert_eq!(route.steps[0].instruction, "Head out on Tongil-ro");
        assert_eq!(route.steps[2].instruction, "Arrive at your destination");
    }

    #[test]
    fn non_ok_code_carries_service_message() {
        let err = parse_route_response(
            StatusCode::OK,
            r#"{"code":"Error","message":"no route found"}"#,
        )
        .unwrap_err();

        assert!(matches!(err, RoutingError::ApiError { ref code, .. } if code == "Error"));
        assert!(err.to_string().contains("no route found"));
    }

    #[test]
    fn osrm_failure_with_bad_request_status_is_still_structured() {
        let err = parse_route_response(
            StatusCode::BAD_REQUEST,
            r#"{"code":"NoRoute","message":"Impossible route between points"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Impossible route between points"));
    }

    #[test]
    fn missing_message_falls_back_to_unknown_error() {
        let err = parse_route_response(StatusCode::OK, r#"{"code":"InvalidQuery"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown error"));
    }

    #[test]
    fn error_envelope_with_malformed_routes_is_structured() {
        let err = parse_route_response(
            StatusCode::BAD_REQUEST,
            r#"{"code":"InvalidValue","message":"bad coordinates","routes":"nope"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RoutingError::ApiError { ref message, .. } if message == "bad coordinates"));
    }

    #[test]
    fn empty_route_list_is_no_route() {
        let err = parse_route_response(StatusCode::OK, r#"{"code":"Ok","routes":[]}"#).unwrap_err();
        assert!(matches!(err, RoutingError::NoRoute));
    }

    #[test]
    fn ok_body_behind_gateway_error_is_http_status() {
        let err = parse_route_response(StatusCode::BAD_GATEWAY, OK_BODY).unwrap_err();
        assert!(matches!(err, RoutingError::HttpStatus { status: 502, .. }));
    }

    #[test]
    fn unparseable_failure_body_is_raw_error() {
        let err = parse_route_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, RoutingError::RawApiError(ref body) if body.contains("bad gateway")));
    }

    #[test]
    fn unparseable_success_body_is_parse_error() {
        let err = parse_route_response(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, RoutingError::ParseError(_)));
    }

    #[test]
    fn route_without_legs_has_no_steps() {
        let body = r#"{"code":"Ok","routes":[{"distance":10,"duration":3,
            "geometry":{"coordinates":[[127.0,37.5],[127.001,37.5]]}}]}"#;
        let route = parse_route_response(StatusCode::OK, body).unwrap();
        assert!(route.steps.is_empty());
        assert_eq!(route.geometry.len(), 2);
    }

    #[test]
    fn url_puts_longitude_first() {
        let router = OsrmRouter::new(&RouterConfig {
            base_url: "https://router.example/route/v1/".to_string(),
            user_agent: "test".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        let url = router.route_url(
            &Point::new(37.5, 126.5, "a"),
            &Point::new(37.25, 127.0, "b"),
            Profile::Walking,
        );
        assert_eq!(url, "https://router.example/route/v1/walking/126.5,37.5;127,37.25");
    }

    #[test]
    fn maneuver_descriptions() {
        assert_eq!(describe_maneuver("turn", Some("left"), "Jong-ro"), "Turn left onto Jong-ro");
        assert_eq!(describe_maneuver("new name", Some("straight"), ""), "Continue straight");
        assert_eq!(describe_maneuver("fork", Some("slight right"), ""), "Keep slight right");
        assert_eq!(describe_maneuver("continue", Some("uturn"), ""), "Make a U-turn");
        assert_eq!(describe_maneuver("roundabout", Some("right"), "Euljiro"), "Enter the roundabout onto Euljiro");
        assert_eq!(describe_maneuver("arrive", None, "Sejong-daero"), "Arrive at your destination on Sejong-daero");
    }
}
