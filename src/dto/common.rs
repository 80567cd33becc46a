use crate::error::{Result, SurveillanceError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const UNKNOWN_ERROR: &str = "Unknown error";

// ============================================================================
// Response Envelope
// ============================================================================

/// Uniform wrapper around every non-binary response.
///
/// Keys are matched case-insensitively: the body is passed through
/// [`fold_keys`] before it reaches this type.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorInfo {
    pub code: Option<i64>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Payload on success, `SurveillanceError::Api` otherwise.
    pub fn into_result(self) -> Result<Option<T>> {
        if self.success {
            return Ok(self.data);
        }

        let (code, message) = match self.error {
            Some(error) => (
                error.code.unwrap_or(0),
                error.message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            ),
            None => (0, UNKNOWN_ERROR.to_string()),
        };
        Err(SurveillanceError::Api { code, message })
    }
}

/// Lowercases every object key, recursively.
pub fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_ascii_lowercase(), fold_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

/// Parses an envelope body and returns its (still undecoded) payload.
///
/// The payload stays a `Value` so a failed call never trips over a payload
/// shape it was not going to use.
pub fn decode_envelope(body: &[u8]) -> Result<Option<Value>> {
    let raw: Value = serde_json::from_slice(body)?;
    let envelope: ApiResponse<Value> = serde_json::from_value(fold_keys(raw))?;
    envelope.into_result()
}

/// Unwraps the single item of a one-element list payload.
pub fn first_item<T>(items: Vec<T>, what: &str) -> Result<T> {
    items
        .into_iter()
        .next()
        .ok_or_else(|| SurveillanceError::protocol(format!("expected one {what}, got none")))
}

// ============================================================================
// Request Helpers
// ============================================================================

/// Parameter set for operations that send nothing besides the session.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoParams {}
