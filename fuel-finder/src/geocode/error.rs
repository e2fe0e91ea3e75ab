//! Reverse-geocoding error types.

/// Errors that can occur when talking to the reverse-geocoding service.
///
/// These never reach the user: the resolver logs them and falls back to an
/// empty origin.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error status
    #[error("geocoder error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
