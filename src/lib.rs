pub mod sdk;

pub use sdk::config::AppConfig;
pub use sdk::format::{human_km, human_min};
pub use sdk::map::{render_map, MapView};
pub use sdk::navigation::{NavigationController, RouteSession, Session, StepCursor};
pub use sdk::routing::{
    Geocoder, NominatimGeocoder, OsrmRouter, Point, Profile, Route, Router, RoutingError, Step,
};
pub use sdk::view::{render, ViewModel};
