use serde::Deserialize;

// --- Nominatim search response ---

#[derive(Deserialize, Debug)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: Option<String>,
}

// --- OSRM route response ---

#[derive(Deserialize, Debug)]
pub struct RouteResponse {
    pub code: String,
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Deserialize, Debug)]
pub struct OsrmRoute {
    pub distance: f64,
    pub duration: f64,
    pub geometry: OsrmGeometry,
    #[serde(default)]
    pub legs: Vec<OsrmLeg>,
}

#[derive(Deserialize, Debug)]
pub struct OsrmGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Deserialize, Debug)]
pub struct OsrmLeg {
    #[serde(default)]
    pub steps: Vec<OsrmStep>,
}

#[derive(Deserialize, Debug)]
pub struct OsrmStep {
    pub distance: f64,
    pub duration: f64,
    #[serde(default)]
    pub name: String,
    pub maneuver: OsrmManeuver,
}

#[derive(Deserialize, Debug)]
pub struct OsrmManeuver {
    pub location: [f64; 2],
    #[serde(rename = "type", default)]
    pub kind: String,
    pub modifier: Option<String>,
    pub instruction: Option<String>,
}
