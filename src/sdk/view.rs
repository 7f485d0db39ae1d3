use crate::sdk::format::{human_km, human_min};
use crate::sdk::map::{render_map, MapView};
use crate::sdk::navigation::session::Session;
use crate::sdk::routing::route::Profile;
use std::fmt;

pub const IDLE_HINT: &str =
    "Enter a start and an end, then run `go` to draw the route. It stays until you `reset`.";
pub const NO_STEP_DATA: &str = "No step data for this route.";

#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    Idle { hint: String },
    Ready(Box<RouteView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteView {
    pub distance: String,
    pub duration: String,
    pub start_label: String,
    pub end_label: String,
    pub profile: Profile,
    pub step: StepPanel,
    pub road_names: Vec<String>,
    pub map: MapView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepPanel {
    Empty,
    Current {
        /// 1-based
        number: usize,
        total: usize,
        instruction: String,
        road_name: String,
        distance: String,
        duration: String,
    },
}

/// Derives everything the user sees from the session alone.
pub fn render(session: Option<&Session>) -> ViewModel {
    let Some(session) = session else {
        return ViewModel::Idle {
            hint: IDLE_HINT.to_string(),
        };
    };

    let route = session.route();
    let step = match session.current_step() {
        Some(step) => StepPanel::Current {
            number: session.current_step_index() + 1,
            total: session.step_count(),
            instruction: step.instruction.clone(),
            road_name: step.road_name.clone(),
            distance: human_km(step.distance_m),
            duration: human_min(step.duration_s),
        },
        None => StepPanel::Empty,
    };

    ViewModel::Ready(Box::new(RouteView {
        distance: human_km(route.distance_m),
        duration: human_min(route.duration_s),
        start_label: session.start.label.clone(),
        end_label: session.end.label.clone(),
        profile: session.profile,
        step,
        road_names: route.road_names(),
        map: render_map(
            &session.start,
            &session.end,
            &route.geometry,
            session.current_location(),
        ),
    }))
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewModel::Idle { hint } => write!(f, "{hint}"),
            ViewModel::Ready(view) => write!(f, "{view}"),
        }
    }
}

impl fmt::Display for RouteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total distance: {} | Estimated time: {} ({})",
            self.distance, self.duration, self.profile
        )?;
        writeln!(f, "Start: {}", self.start_label)?;
        writeln!(f, "End:   {}", self.end_label)?;
        write!(f, "{}", self.step)
    }
}

impl fmt::Display for StepPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepPanel::Empty => write!(f, "{NO_STEP_DATA}"),
            StepPanel::Current {
                number,
                total,
                instruction,
                road_name,
                distance,
                duration,
            } => {
                write!(f, "Step {number}/{total}: {instruction}")?;
                if !road_name.is_empty() {
                    write!(f, " [{road_name}]")?;
                }
                write!(f, " ({distance}, {duration})")
            }
        }
    }
}
