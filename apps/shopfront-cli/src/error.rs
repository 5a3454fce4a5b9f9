//! # API Error Type
//!
//! Unified error type for screen commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shopfront                              │
//! │                                                                         │
//! │  Terminal UI                 Commands                                   │
//! │  ───────────                 ────────                                   │
//! │                                                                         │
//! │  "buy 7"                                                                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  State missing? ─── STATE_NOT_MANAGED ──────────┐  (fatal)       │  │
//! │  │         │                                       │                │  │
//! │  │         ▼                                       ▼                │  │
//! │  │  Unknown product? ─── NOT_FOUND ─────────── ApiError ──────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The UI prints `message` and keeps going, unless the error is fatal.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopfront_catalog::CatalogError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 7"
/// }
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
    /// Product or cart entry not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Catalog could not be fetched
    CatalogUnavailable,

    /// A command asked for state that was never registered
    StateNotManaged,

    /// Internal error
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

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// State of type `state_type` was requested but never managed.
    pub fn state_not_managed(state_type: &str) -> Self {
        ApiError::new(
            ErrorCode::StateNotManaged,
            format!(
                "{} requested before it was registered with the app",
                state_type
            ),
        )
    }

    /// Wiring errors end the session; everything else is shown and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self.code, ErrorCode::StateNotManaged | ErrorCode::Internal)
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidConfig(reason) => ApiError::validation(reason),
            CatalogError::InvalidUrl(e) => ApiError::validation(format!("Invalid URL: {}", e)),
            CatalogError::InvalidProduct(e) => {
                tracing::error!("Catalog returned an invalid product: {}", e);
                ApiError::new(
                    ErrorCode::CatalogUnavailable,
                    "Catalog returned invalid data",
                )
            }
            other => ApiError::new(ErrorCode::CatalogUnavailable, other.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Terminal I/O failed: {}", err);
        ApiError::internal(format!("Terminal I/O failed: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
