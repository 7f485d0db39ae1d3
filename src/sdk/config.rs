use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org/route/v1";
pub const DEFAULT_USER_AGENT: &str = "osm-route/0.1 (learning project)";

#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Minimum spacing between two geocoding requests. Zero disables it.
    pub interval: Duration,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouterConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub geocoder: GeocoderConfig,
    pub router: RouterConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            geocoder: GeocoderConfig {
                base_url: DEFAULT_NOMINATIM_URL.to_string(),
                user_agent: DEFAULT_USER_AGENT.to_string(),
                timeout: Duration::from_secs(15),
                interval: Duration::from_millis(1000),
                limit: 1,
            },
            router: RouterConfig {
                base_url: DEFAULT_OSRM_URL.to_string(),
                user_agent: DEFAULT_USER_AGENT.to_string(),
                timeout: Duration::from_secs(20),
            },
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup, falling
    /// back to the public OpenStreetMap services for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("NOMINATIM_URL") {
            config.geocoder.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup("OSRM_URL") {
            config.router.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(agent) = lookup("OSM_ROUTE_USER_AGENT") {
            config.geocoder.user_agent = agent.clone();
            config.router.user_agent = agent;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "GEOCODE_TIMEOUT_SECS")? {
            config.geocoder.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "ROUTE_TIMEOUT_SECS")? {
            config.router.timeout = Duration::from_secs(secs);
        }
        if let Some(millis) = parse_var::<u64, _>(&lookup, "GEOCODE_INTERVAL_MS")? {
            config.geocoder.interval = Duration::from_millis(millis);
        }

        if config.geocoder.user_agent.trim().is_empty() {
            anyhow::bail!("OSM_ROUTE_USER_AGENT must not be empty, Nominatim rejects anonymous clients");
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("{name} has an invalid value: {raw:?}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_point_at_public_services() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.geocoder.timeout, Duration::from_secs(15));
        assert_eq!(config.router.timeout, Duration::from_secs(20));
        assert_eq!(config.geocoder.limit, 1);
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("OSRM_URL", "http://localhost:5000/route/v1/"),
            ("OSM_ROUTE_USER_AGENT", "tester/1.0"),
            ("GEOCODE_INTERVAL_MS", "0"),
            ("ROUTE_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.router.base_url, "http://localhost:5000/route/v1");
        assert_eq!(config.router.user_agent, "tester/1.0");
        assert_eq!(config.geocoder.user_agent, "tester/1.0");
        assert_eq!(config.geocoder.interval, Duration::ZERO);
        assert_eq!(config.router.timeout, Duration::from_secs(5));
    }

    #[test]
    fn malformed_number_names_the_variable() {
        let err = AppConfig::from_lookup(lookup_from(&[("GEOCODE_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("GEOCODE_TIMEOUT_SECS"));
    }

    #[test]
    fn blank_user_agent_is_rejected() {
        assert!(AppConfig::from_lookup(lookup_from(&[("OSM_ROUTE_USER_AGENT", "  ")])).is_err());
    }
}
