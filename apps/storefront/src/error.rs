//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  View layer                  Rust Backend                               │
//! │  ──────────                  ────────────                               │
//! │                                                                         │
//! │  {"command":"dispatch", ...}                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  ── Result<T, ApiError>                        │  │
//! │  │         │                                                        │  │
//! │  │  Unknown type? ─── CoreError::UnrecognizedAction ──┐            │  │
//! │  │  No payload?   ─── CoreError::Validation ──────────┤            │  │
//! │  │  Not in cart?  ─── CoreError::LineNotFound ────────┴─ ApiError ►│  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {"error": {"code": "NOT_FOUND", "message": "..."}}                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are reported, never retried: every variant here is a caller
//! mistake, not a transient condition. Configuration problems never reach
//! this type; they stop startup before the first request is read.

use serde::Serialize;
use storefront_core::CoreError;

/// API error returned from commands.
///
/// ```json
/// { "code": "NOT_FOUND", "message": "Cart line not found: item0009" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A referenced cart line does not exist
    NotFound,

    /// Missing payload, missing field or malformed request
    ValidationError,

    /// Action type not handled by the target reducer
    UnrecognizedAction,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LineNotFound { .. } => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::UnrecognizedAction { .. } => {
                ApiError::new(ErrorCode::UnrecognizedAction, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::MalformedCatalog(_) => {
                tracing::error!(error = %err, "catalog failed to load");
                ApiError::internal(err.to_string())
            }
        }
    }
}

/// Malformed request JSON.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::validation(format!("Malformed request: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ValidationError;

    #[test]
    fn test_core_error_codes() {
        let err: ApiError = CoreError::LineNotFound {
            sku: "item0009".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Cart line not found: item0009");

        let err: ApiError = CoreError::UnrecognizedAction {
            kind: "UNKNOWN".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::UnrecognizedAction);

        let err: ApiError = CoreError::from(ValidationError::MissingPayload {
            action: "ADD".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "payload is required for ADD action");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::new(ErrorCode::UnrecognizedAction, "Unrecognized action type: X");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "UNRECOGNIZED_ACTION",
                "message": "Unrecognized action type: X"
            })
        );
    }
}
