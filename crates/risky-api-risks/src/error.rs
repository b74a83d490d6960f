//! Error types for the Risk API.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use risky_core::{FieldError, RiskyError, ValidationErrors};
use serde::Serialize;
use utoipa::ToSchema;

/// A single field violation in an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldErrorResponse {
    /// The field that failed validation.
    pub field: String,
    /// Why the value was rejected.
    pub message: String,
}

impl From<FieldError> for FieldErrorResponse {
    fn from(err: FieldError) -> Self {
        Self {
            field: err.field,
            message: err.message,
        }
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g., `not_found`).
    pub error: String,
    /// Human-readable description.
    pub message: String,
    /// Per-field violations, present only for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorResponse>>,
}

/// Error type for the Risk API.
#[derive(Debug, thiserror::Error)]
pub enum ApiRisksError {
    /// No risk with the requested id.
    #[error("record not found: {0}")]
    NotFound(String),

    /// Create input failed one or more field rules.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The request could not be understood (bad query value, malformed JSON).
    #[error("{0}")]
    InvalidRequest(String),

    /// Anything the client cannot fix.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiRisksError {
    /// The HTTP status this error maps to.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RiskyError> for ApiRisksError {
    fn from(err: RiskyError) -> Self {
        match err {
            RiskyError::RecordNotFound { id } => Self::NotFound(id),
            RiskyError::Validation(errors) => Self::Validation(errors),
            RiskyError::Storage { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiRisksError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiRisksError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::NotFound(id) => ErrorResponse {
                error: "not_found".to_string(),
                message: format!("The requested resource was not found: {id}"),
                errors: None,
            },
            Self::Validation(errors) => ErrorResponse {
                error: "validation_error".to_string(),
                message: "There is some problem with the data you submitted.".to_string(),
                errors: Some(errors.into_iter().map(Into::into).collect()),
            },
            Self::InvalidRequest(msg) => ErrorResponse {
                error: "invalid_request".to_string(),
                message: msg,
                errors: None,
            },
            Self::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse {
                    error: "internal_error".to_string(),
                    message: "We encountered an error while processing your request.".to_string(),
                    errors: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
