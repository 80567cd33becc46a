use thiserror::Error;

pub type Result<T> = std::result::Result<T, SurveillanceError>;

/// Errors surfaced by [`SurveillanceApiClient`](crate::SurveillanceApiClient).
///
/// Nothing is retried internally; every variant reaches the caller of the
/// operation that produced it.
#[derive(Debug, Error)]
pub enum SurveillanceError {
    /// A required argument was empty or blank; no request was sent.
    #[error("invalid argument: {0} must not be empty")]
    InvalidArgument(&'static str),

    /// Connection failure, non-2xx status, or unreadable body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body did not match the expected envelope or payload shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with `success: false`.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    /// The server answered `success: true` but without the data the
    /// endpoint documents, e.g. an empty single-item list.
    #[error("protocol violation: {0}")]
    Protocol(String),
}

impl SurveillanceError {
    /// Vendor error code, when this is an API error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            SurveillanceError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub(crate) fn protocol(msg: impl Into<String>) -> Self {
        SurveillanceError::Protocol(msg.into())
    }
}
