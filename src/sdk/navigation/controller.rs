use super::session::{RouteSession, Session};
use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::route::{Point, Profile};
use crate::sdk::routing::service::{Geocoder, Router};
use crate::sdk::view::{self, ViewModel};

pub const DEFAULT_START: &str = "서울역";
pub const DEFAULT_END: &str = "광화문";

/// The form fields that survive between actions.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteForm {
    pub start_addr: String,
    pub end_addr: String,
    pub profile: Profile,
}

impl Default for RouteForm {
    fn default() -> Self {
        Self {
            start_addr: DEFAULT_START.to_string(),
            end_addr: DEFAULT_END.to_string(),
            profile: Profile::default(),
        }
    }
}

/// Runs user actions against the geocoder and router and keeps the session.
///
/// Failed actions never touch the session: whatever route was on screen
/// before stays there.
pub struct NavigationController<G, R> {
    geocoder: G,
    router: R,
    form: RouteForm,
    session: RouteSession,
}

impl<G: Geocoder, R: Router> NavigationController<G, R> {
    pub fn new(geocoder: G, router: R) -> Self {
        Self::with_form(geocoder, router, RouteForm::default())
    }

    pub fn with_form(geocoder: G, router: R, form: RouteForm) -> Self {
        Self {
            geocoder,
            router,
            form,
            session: RouteSession::default(),
        }
    }

    pub fn form(&self) -> &RouteForm {
        &self.form
    }

    pub fn set_start_addr(&mut self, addr: impl Into<String>) {
        self.form.start_addr = addr.into();
    }

    pub fn set_end_addr(&mut self, addr: impl Into<String>) {
        self.form.end_addr = addr.into();
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.form.profile = profile;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.get()
    }

    pub fn has_route(&self) -> bool {
        self.session.is_ready()
    }

    /// Routes whatever is currently in the form.
    pub fn submit(&mut self) -> Result<(), RoutingError> {
        let RouteForm {
            start_addr,
            end_addr,
            profile,
        } = self.form.clone();
        self.route_addresses(&start_addr, &end_addr, profile)
    }

    /// Geocodes both addresses, then routes between them.
    pub fn route_addresses(
        &mut self,
        start_addr: &str,
        end_addr: &str,
        profile: Profile,
    ) -> Result<(), RoutingError> {
        self.form = RouteForm {
            start_addr: start_addr.to_string(),
            end_addr: end_addr.to_string(),
            profile,
        };

        let start_query = non_empty(start_addr, "start")?;
        let end_query = non_empty(end_addr, "end")?;

        let start = self.resolve(start_query)?;
        let end = self.resolve(end_query)?;
        self.compute(start, end, profile)
    }

    /// Routes between two hand-entered positions, skipping geocoding.
    pub fn route_coordinates(
        &mut self,
        start: Point,
        end: Point,
        profile: Profile,
    ) -> Result<(), RoutingError> {
        validate(&start)?;
        validate(&end)?;
        self.form.profile = profile;
        self.compute(start, end, profile)
    }

    pub fn previous(&mut self) {
        if let Some(session) = self.session.get_mut() {
            session.cursor_mut().previous();
        }
    }

    pub fn first(&mut self) {
        if let Some(session) = self.session.get_mut() {
            session.cursor_mut().first();
        }
    }

    pub fn next(&mut self) {
        if let Some(session) = self.session.get_mut() {
            session.cursor_mut().next();
        }
    }

    pub fn reset(&mut self) {
        self.session.clear();
    }

    pub fn render(&self) -> ViewModel {
        view::render(self.session.get())
    }

    fn resolve(&self, query: &str) -> Result<Point, RoutingError> {
        match self.geocoder.geocode(query)? {
            Some(point) => {
                log::info!(
                    "Geocoded \"{}\" to ({}, {}) {}",
                    query,
                    point.lat,
                    point.lon,
                    point.label
                );
                Ok(point)
            }
            None => {
                log::warn!("No geocoding result for \"{}\"", query);
                Err(RoutingError::NoGeocodeResult {
                    query: query.to_string(),
                })
            }
        }
    }

    fn compute(&mut self, start: Point, end: Point, profile: Profile) -> Result<(), RoutingError> {
        let route = self.router.route(&start, &end, profile).map_err(|e| {
            log::warn!("Routing {} -> {} failed: {}", start.label, end.label, e);
            e
        })?;
        self.session.replace(Session::new(start, end, profile, route));
        Ok(())
    }
}

fn non_empty<'a>(input: &'a str, field: &'static str) -> Result<&'a str, RoutingError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(RoutingError::EmptyInput { field })
    } else {
        Ok(trimmed)
    }
}

fn validate(point: &Point) -> Result<(), RoutingError> {
    if !point.lat.is_finite() || !(-90.0..=90.0).contains(&point.lat) {
        return Err(RoutingError::InvalidCoordinate(format!(
            "latitude {} is outside [-90, 90]",
            point.lat
        )));
    }
    if !point.lon.is_finite() || !(-180.0..=180.0).contains(&point.lon) {
        return Err(RoutingError::InvalidCoordinate(format!(
            "longitude {} is outside [-180, 180]",
            point.lon
        )));
    }
    Ok(())
}
