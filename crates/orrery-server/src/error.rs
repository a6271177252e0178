//! Mapping from the core error taxonomy to HTTP responses
//!
//! The HTTP surface exposes exactly two client-facing error shapes:
//! 404 `{"error": "..."}` for failed lookups and 400
//! `{"errors": ["validation errors"]}` for everything the client got
//! wrong. Detail stays in the logs.

use axum::extract::rejection::JsonRejection;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use orrery_core::{ErrorKind, OrreryError};
use serde_json::json;
use tracing::{debug, error};

/// Wrapper carrying an OrreryError across the axum response boundary
#[derive(Debug)]
pub struct ApiError(OrreryError);

impl From<OrreryError> for ApiError {
    fn from(err: OrreryError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(OrreryError::MalformedBody {
            reason: rejection.to_string(),
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0.kind() {
            ErrorKind::NotFound => {
                debug!(code = self.0.code(), "lookup failed: {}", self.0);
                // Scientists are the only entity fetched by id over HTTP
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Scientist not found" })),
                )
                    .into_response()
            }
            ErrorKind::InvalidInput | ErrorKind::ConstraintViolation => {
                debug!(code = self.0.code(), "rejected: {}", self.0);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "errors": ["validation errors"] })),
                )
                    .into_response()
            }
            ErrorKind::Persistence | ErrorKind::Internal => {
                error!(code = self.0.code(), "request failed: {}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "errors": ["internal server error"] })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response =
            ApiError::from(OrreryError::ScientistNotFound { id: 1 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response =
            ApiError::from(OrreryError::MissingField { field: "name" }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::from(OrreryError::Constraint {
            message: "FOREIGN KEY constraint failed".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = ApiError::from(OrreryError::Persistence {
            message: "disk gone".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
