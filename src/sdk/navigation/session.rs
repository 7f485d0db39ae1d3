use super::steps::StepCursor;
use crate::sdk::routing::route::{Coord, Point, Profile, Route, Step};

/// The last successfully computed route and where the user is along it.
///
/// The route is only ever swapped as a whole through [`RouteSession::replace`],
/// so the cursor length always matches its step list.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub start: Point,
    pub end: Point,
    pub profile: Profile,
    route: Route,
    cursor: StepCursor,
}

impl Session {
    pub fn new(start: Point, end: Point, profile: Profile, route: Route) -> Self {
        let cursor = StepCursor::new(route.steps.len());
        Self {
            start,
            end,
            profile,
            route,
            cursor,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn current_step_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn step_count(&self) -> usize {
        self.route.steps.len()
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.route.steps.get(self.cursor.index())
    }

    pub fn current_location(&self) -> Option<Coord> {
        self.current_step().map(|step| step.maneuver_location)
    }

    pub fn cursor_mut(&mut self) -> &mut StepCursor {
        &mut self.cursor
    }
}

/// Holder for the optional [`Session`]; absent until the first success.
#[derive(Debug, Default)]
pub struct RouteSession {
    current: Option<Session>,
}

impl RouteSession {
    pub fn get(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut Session> {
        self.current.as_mut()
    }

    pub fn is_ready(&self) -> bool {
        self.current.is_some()
    }

    /// Swaps in a freshly computed route. The highlighted step index carries
    /// over from the previous session and is reclamped to the new steps.
    pub fn replace(&mut self, mut next: Session) {
        if let Some(previous) = &self.current {
            let steps = next.step_count();
            next.cursor = previous.cursor;
            next.cursor.reclamp(steps);
        }
        log::info!(
            "Session updated: {} -> {} ({}, {} steps)",
            next.start.label,
            next.end.label,
            next.profile,
            next.step_count()
        );
        self.current = Some(next);
    }

    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            log::info!("Session cleared");
        }
    }
}
