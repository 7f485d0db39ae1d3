pub mod controller;
pub mod session;
pub mod steps;

pub use controller::{NavigationController, RouteForm};
pub use session::{RouteSession, Session};
pub use steps::StepCursor;
