use crate::sdk::routing::route::{Coord, Point};
use minijinja::{context, Environment};
use serde::Serialize;
use std::{fs, io, path::Path};

pub const DEFAULT_ZOOM: u8 = 13;
pub const HIGHLIGHT_RADIUS_M: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl From<Coord> for LatLon {
    fn from((lon, lat): Coord) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLon,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub center: LatLon,
    pub radius_m: f64,
}

/// Everything the map surface needs to draw one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLon,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    /// `[lat, lon]` pairs, the order Leaflet expects.
    pub polyline: Vec<[f64; 2]>,
    pub highlight: Option<Circle>,
}

/// Projects a route onto map overlays. Holds no state, so repeated calls
/// with the same inputs give equal views.
pub fn render_map(start: &Point, end: &Point, geometry: &[Coord], current: Option<Coord>) -> MapView {
    let center = LatLon {
        lat: (start.lat + end.lat) / 2.0,
        lon: (start.lon + end.lon) / 2.0,
    };

    let markers = vec![
        Marker {
            position: LatLon {
                lat: start.lat,
                lon: start.lon,
            },
            tooltip: "Start".to_string(),
        },
        Marker {
            position: LatLon {
                lat: end.lat,
                lon: end.lon,
            },
            tooltip: "End".to_string(),
        },
    ];

    MapView {
        center,
        zoom: DEFAULT_ZOOM,
        markers,
        polyline: geometry.iter().map(|&(lon, lat)| [lat, lon]).collect(),
        highlight: current.map(|coord| Circle {
            center: coord.into(),
            radius_m: HIGHLIGHT_RADIUS_M,
        }),
    }
}

const MAP_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
const map = L.map("map").setView([{{ map.center.lat }}, {{ map.center.lon }}], {{ map.zoom }});
L.tileLayer("https://tile.openstreetmap.org/{z}/{x}/{y}.png", {
  maxZoom: 19,
  attribution: "&copy; OpenStreetMap contributors"
}).addTo(map);
{%- for marker in map.markers %}
L.marker([{{ marker.position.lat }}, {{ marker.position.lon }}]).bindTooltip({{ marker.tooltip|tojson }}).addTo(map);
{%- endfor %}
L.polyline({{ map.polyline|tojson }}, { weight: 6, opacity: 0.85 }).addTo(map);
{%- if map.highlight %}
L.circle([{{ map.highlight.center.lat }}, {{ map.highlight.center.lon }}], {
  radius: {{ map.highlight.radius_m }},
  color: "red",
  fillOpacity: 0.6
}).addTo(map);
{%- endif %}
</script>
</body>
</html>
"#;

impl MapView {
    /// Renders a standalone Leaflet page over OpenStreetMap tiles.
    pub fn to_html(&self, title: &str) -> Result<String, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("map.html", MAP_TEMPLATE)?;
        let tmpl = env.get_template("map.html")?;
        tmpl.render(context! { title => title, map => self })
    }

    pub fn write_html<P: AsRef<Path>>(&self, path: P, title: &str) -> io::Result<()> {
        let html = self.to_html(title).map_err(io::Error::other)?;
        fs::write(path, html)
    }
}
