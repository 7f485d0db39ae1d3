use std::fmt;
use std::str::FromStr;

/// A `(lon, lat)` pair, the axis order the routing service speaks.
pub type Coord = (f64, f64);

/// A named location, either geocoded or entered by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

impl Point {
    pub fn new(lat: f64, lon: f64, label: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            label: label.into(),
        }
    }

    /// A point entered as raw coordinates, labelled with those coordinates.
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, format!("{lat:.5}, {lon:.5}"))
    }

    pub fn coord(&self) -> Coord {
        (self.lon, self.lat)
    }
}

/// Travel mode passed to the routing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Profile {
    #[default]
    Driving,
    Walking,
    Cycling,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Driving, Profile::Walking, Profile::Cycling];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Driving => "driving",
            Profile::Walking => "walking",
            Profile::Cycling => "cycling",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Profile::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| format!("unknown profile {s:?}, expected driving, walking or cycling"))
    }
}

/// One turn-by-turn instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub instruction: String,
    /// Empty when the service has no name for the segment.
    pub road_name: String,
    pub distance_m: f64,
    pub duration_s: f64,
    pub maneuver_location: Coord,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    pub distance_m: f64,
    pub duration_s: f64,
    pub geometry: Vec<Coord>,
    pub steps: Vec<Step>,
}

impl Route {
    /// Non-empty road names in travel order, each listed once.
    pub fn road_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for step in &self.steps {
            let name = step.road_name.trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(name: &str) -> Step {
        Step {
            instruction: "Continue".to_string(),
            road_name: name.to_string(),
            distance_m: 10.0,
            duration_s: 2.0,
            maneuver_location: (126.97, 37.55),
        }
    }

    #[test]
    fn profile_parses_case_insensitively() {
        assert_eq!("Walking".parse::<Profile>(), Ok(Profile::Walking));
        assert_eq!(" cycling ".parse::<Profile>(), Ok(Profile::Cycling));
        assert!("flying".parse::<Profile>().is_err());
        assert_eq!(Profile::default().to_string(), "driving");
    }

    #[test]
    fn coord_is_lon_lat() {
        let p = Point::new(37.5547, 126.9706, "Seoul Station");
        assert_eq!(p.coord(), (126.9706, 37.5547));
    }

    #[test]
    fn coordinate_points_are_labelled_with_their_position() {
        let p = Point::from_lat_lon(37.5, 127.0);
        assert_eq!(p.label, "37.50000, 127.00000");
    }

    #[test]
    fn road_names_skip_blanks_and_repeats() {
        let route = Route {
            steps: vec![
                step("Sejong-daero"),
                step(""),
                step("  "),
                step("Saemunan-ro"),
                step("Sejong-daero"),
            ],
            ..Route::default()
        };
        assert_eq!(route.road_names(), vec!["Sejong-daero", "Saemunan-ro"]);
    }
}
