use serde::Deserialize;
use thiserror::Error;

// Error envelope OSRM returns for anything other than "Ok"
#[derive(Deserialize, Debug)]
pub struct OsrmErrorPayload {
    pub code: String,
    pub message: Option<String>,
}

/// Everything that can stop a route computation. The `Display` text is
/// what the user gets to see.
#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("The {field} location is empty, please enter an address")]
    EmptyInput { field: &'static str },

    #[error("Could not find coordinates for \"{query}\", try a different wording")]
    NoGeocodeResult { query: String },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    // Structured failure reported by the routing service in the body
    #[error("Route calculation failed ({code}): {message}")]
    ApiError { code: String, message: String },

    // Fallback for failure bodies that are not in the expected JSON format
    #[error("Unstructured API Error: {0}")]
    RawApiError(String),

    #[error("Service answered with HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("The routing service found no route between these points")]
    NoRoute,

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}
