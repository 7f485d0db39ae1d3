pub mod osrm;
pub mod types;

pub use osrm::OsrmRouter;
