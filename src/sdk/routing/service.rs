use super::error::RoutingError;
use super::route::{Point, Profile, Route};

pub trait Geocoder {
    /// Resolves free text to the best matching point.
    ///
    /// `Ok(None)` means the service had nothing for the query, or the query
    /// was blank and no request was made.
    fn geocode(&self, query: &str) -> Result<Option<Point>, RoutingError>;
}

pub trait Router {
    /// Computes a route between two points for the given travel profile.
    fn route(&self, start: &Point, end: &Point, profile: Profile) -> Result<Route, RoutingError>;
}

impl<T: Geocoder + ?Sized> Geocoder for &T {
    fn geocode(&self, query: &str) -> Result<Option<Point>, RoutingError> {
        (**self).geocode(query)
    }
}

impl<T: Router + ?Sized> Router for &T {
    fn route(&self, start: &Point, end: &Point, profile: Profile) -> Result<Route, RoutingError> {
        (**self).route(start, end, profile)
    }
}
