use super::error::RoutingError;
use super::provider::types::NominatimPlace;
use super::route::Point;
use super::service::Geocoder;
use crate::sdk::config::GeocoderConfig;
use crate::sdk::util::rate_limit::{self, Limiter};
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Geocoding client for a Nominatim `search` endpoint.
///
/// Nominatim's usage policy asks for an identifying `User-Agent` and at most
/// one request per second, so every call goes through the limiter.
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
    limit: u32,
    limiter: Option<Limiter>,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limit: config.limit.max(1),
            limiter: rate_limit::interval_limiter(config.interval),
        })
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, query: &str) -> Result<Option<Point>, RoutingError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        if let Some(limiter) = &self.limiter {
            rate_limit::wait(limiter);
        }
        log::debug!("[PROVIDER] Calling Nominatim search for \"{}\"", query);

        let limit = self.limit.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("format", "json"), ("limit", limit.as_str())])
            .send()?;

        let status = response.status();
        let text = ensure_success(status, response.text()?)?;

        parse_search_response(query, &text).map_err(|e| {
            log::error!(
                "Failed to parse Nominatim response for \"{}\"\nError: {}. Body: {}",
                query,
                e,
                text
            );
            e
        })
    }
}

fn ensure_success(status: StatusCode, text: String) -> Result<String, RoutingError> {
    if status.is_success() {
        return Ok(text);
    }
    log::error!(
        "Geocoder returned non-success status: {}. Body: {}",
        status,
        text
    );
    Err(RoutingError::HttpStatus {
        status: status.as_u16(),
        body: text,
    })
}

/// Picks the first candidate of a Nominatim `format=json` reply.
pub fn parse_search_response(query: &str, text: &str) -> Result<Option<Point>, RoutingError> {
    let places: Vec<NominatimPlace> = serde_json::from_str(text)?;
    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };

    let lat = parse_degrees(&place.lat, "lat")?;
    let lon = parse_degrees(&place.lon, "lon")?;
    let label = place
        .display_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| query.to_string());

    Ok(Some(Point::new(lat, lon, label)))
}

fn parse_degrees(raw: &str, field: &str) -> Result<f64, RoutingError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RoutingError::InvalidResponse(format!("{field} is not a number: {raw:?}")))
}
