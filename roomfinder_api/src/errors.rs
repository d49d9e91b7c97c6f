//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a usable response (DNS, connect, TLS,
    /// timeout). Call sites that render listings substitute an empty
    /// result for this variant instead of surfacing it.
    #[error("request failed")]
    Transport(#[source] reqwest::Error),
    /// The backend reported a failure: a non-success status, an empty
    /// body, or an explicit `success: false` envelope. `message` is the
    /// backend's own message and is shown to the user verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The response body did not match any recognized envelope shape.
    #[error("unexpected response from server")]
    UnexpectedShape,
    /// A URL could not be built from the base URL and endpoint path.
    #[error("invalid request URL")]
    InvalidUrl,
}
