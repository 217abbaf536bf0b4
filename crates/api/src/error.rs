use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use parktrack_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `parktrack_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::InvalidFormat { .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INVALID_FORMAT",
                    core.to_string(),
                ),
                CoreError::UnrecognizedSlot { .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UNRECOGNIZED_SLOT",
                    core.to_string(),
                ),
                CoreError::AlreadyParked { .. } => {
                    (StatusCode::CONFLICT, "ALREADY_PARKED", core.to_string())
                }
                CoreError::SlotOccupied { .. } => {
                    (StatusCode::CONFLICT, "SLOT_OCCUPIED", core.to_string())
                }
                CoreError::NotParked { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_PARKED", core.to_string())
                }
                CoreError::Config(msg) | CoreError::Storage(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: CoreError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn input_errors_are_client_errors() {
        assert_eq!(
            status_of(CoreError::InvalidFormat { input: "x".into() }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(CoreError::UnrecognizedSlot { input: "P11".into() }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(CoreError::AlreadyParked { plate: "ABC1234".into() }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(CoreError::SlotOccupied { slot: "P1".into() }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(CoreError::NotParked { plate: "ABC1234".into() }),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn storage_errors_are_server_errors() {
        assert_eq!(
            status_of(CoreError::Storage("database is locked".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
