//! Error types for the Spotify Web API layer.

use thiserror::Error;

/// A raw wire value that could not be turned into its typed form.
///
/// Returned by the derived accessors on the model types. The serde
/// field validators surface the same messages as JSON decode errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Country code not in the market list.
    #[error("unknown market code: {0:?}")]
    UnknownMarket(String),

    /// Album type or album group string with no matching variant.
    #[error("unknown album type: {0:?}")]
    UnknownAlbumType(String),

    /// Copyright type other than "C" or "P".
    #[error("unknown copyright type: {0:?}")]
    UnknownCopyrightType(String),

    /// Release date that is not `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    #[error("invalid release date {value:?}: {reason}")]
    InvalidReleaseDate { value: String, reason: String },

    /// Precision string other than "year", "month" or "day".
    #[error("unknown release date precision: {0:?}")]
    UnknownPrecision(String),

    /// Precision disagrees with the populated date components.
    #[error("release date {date:?} does not have {precision} precision")]
    PrecisionMismatch { date: String, precision: String },
}

/// Main error type for all client operations.
///
/// Not-found is deliberately absent: lookups report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The service rejected the request parameters (HTTP 400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing, invalid or expired access token (HTTP 401/403).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Too many requests (HTTP 429).
    #[error("Rate limited: too many requests")]
    RateLimited { retry_after: Option<u64> },

    /// Any other non-success response.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Client configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A decoded record holds a value its accessor cannot interpret.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;
