//! Error types for the dashboard layer.

use std::fmt;

/// Errors produced by the dashboard layer, wrapping upstream API errors
/// and adding gating and input validation failures.
#[derive(Debug)]
pub enum RoomFinderError {
    /// An error from the underlying API client.
    Api(roomfinder_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// The signed-in user's role or approval status does not allow the
    /// operation. Raised before any network call is made.
    AccessDenied(String),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
}

impl fmt::Display for RoomFinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::AccessDenied(msg) => write!(f, "{}", msg),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for RoomFinderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<roomfinder_api::Error> for RoomFinderError {
    fn from(e: roomfinder_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for RoomFinderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
