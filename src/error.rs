use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Unified request error. Business-rule failures carry the short message
/// returned to the client; store and crypto failures collapse to a generic
/// 500 with the cause logged server-side only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid email")]
    InvalidEmail,

    #[error("User already exists")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    NotFound,

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("City already in favorites")]
    DuplicateCity,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidEmail | ApiError::DuplicateEmail | ApiError::DuplicateCity => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidCredentials => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database error");
            }
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
            }
            ApiError::InvalidCredentials => {
                tracing::warn!("invalid login attempt");
            }
            ApiError::Unauthorized(msg) => {
                tracing::warn!(message = %msg, "unauthorized request");
            }
            _ => {
                tracing::debug!(error = %self, "request rejected");
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // 500 bodies never expose the underlying cause
        let message = if status.is_server_error() {
            "Server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_errors_map_to_client_codes() {
        assert_eq!(ApiError::InvalidEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::DuplicateEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Unauthorized("No token, authorization denied").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::DuplicateCity.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_and_crypto_failures_map_to_500() {
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("signing failed")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn client_messages_match_wire_contract() {
        assert_eq!(ApiError::DuplicateEmail.to_string(), "User already exists");
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
        assert_eq!(
            ApiError::DuplicateCity.to_string(),
            "City already in favorites"
        );
        assert_eq!(
            ApiError::Unauthorized("Token is not valid").to_string(),
            "Token is not valid"
        );
    }
}
