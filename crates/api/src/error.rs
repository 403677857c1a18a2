use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use projecthub_core::error::CoreError;
use projecthub_db::store::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures, the latter always tagged with the operation that failed.
/// Implements [`IntoResponse`] to produce consistent JSON error
/// bodies of the form `{"error", "code", "details"?}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `projecthub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence failure during a named operation. `message` is what the
    /// client sees; `source` is logged only.
    #[error("{message}: {source}")]
    Operation {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Attach a client-facing failure message to a store error.
    pub fn operation(message: &'static str, source: StoreError) -> Self {
        AppError::Operation { message, source }
    }
}

/// A malformed or mistyped JSON body is a validation failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity = %entity, id = %id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} not found"),
                        None,
                    )
                }
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Validation failed".to_string(),
                    Some(msg.clone()),
                ),
                CoreError::Unauthorized(reason) => {
                    tracing::debug!(reason = %reason, "Rejected unauthenticated request");
                    (
                        StatusCode::UNAUTHORIZED,
                        "UNAUTHORIZED",
                        "Authentication required".to_string(),
                        None,
                    )
                }
                CoreError::Forbidden(msg) => {
                    (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone(), None)
                }
            },

            // --- Persistence errors ---
            AppError::Operation { message, source } => {
                tracing::error!(error = %source, "{message}");
                internal(message)
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, axum::Json(body)).into_response()
    }
}

fn internal(message: &str) -> (StatusCode, &'static str, String, Option<String>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        message.to_string(),
        None,
    )
}
