//! Display helpers for route figures.

/// Meters as kilometers with two decimals, e.g. `"2.87 km"`.
pub fn human_km(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}

/// Seconds as whole minutes, e.g. `"7 min"`.
pub fn human_min(seconds: f64) -> String {
    format!("{:.0} min", seconds / 60.0)
}
