pub mod error;
pub mod geocode;
pub mod provider;
pub mod route;
pub mod service;

pub use error::RoutingError;
pub use geocode::NominatimGeocoder;
pub use provider::OsrmRouter;
pub use route::{Coord, Point, Profile, Route, Step};
pub use service::{Geocoder, Router};
