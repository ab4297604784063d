//! HTTP mapping of pipeline errors.
//!
//! Every error renders as `{"error": "message"}`:
//! - caller input problems, including malformed JSON bodies → 400
//! - a collaborator (search, models, fetch) failing → 502
//! - a collaborator timing out → 504
//! - anything else → 500

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nr_core::Error;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    BadGateway(String),
    GatewayTimeout(String),
    Internal(String),
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let message = error.to_string();
        if error.is_user_error() {
            ApiError::BadRequest(message)
        } else if matches!(error, Error::Timeout { .. }) {
            ApiError::GatewayTimeout(message)
        } else if error.is_collaborator_failure() {
            ApiError::BadGateway(message)
        } else {
            ApiError::Internal(message)
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %message, "Rejected request");
        }
        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn status_of(error: Error) -> StatusCode {
        ApiError::from(error).into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_of(Error::InvalidSummaryType("bogus".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(Error::EmptySummary { url: "u".into() }), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(Error::MissingField("start_date")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(Error::Search("down".into())), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_of(Error::Timeout { operation: "search", after: Duration::from_secs(1) }),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(status_of(Error::InvalidUrl("x".into())), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
