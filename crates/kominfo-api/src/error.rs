// ============================================================================
// Kominfo API - Error Responses
// File: crates/kominfo-api/src/error.rs
// ============================================================================

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use kominfo_core::error::DomainError;

use crate::response::ApiResponse;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "VALIDATION_ERROR",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ApiError::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            ApiError::BadGateway(_) => "UPSTREAM_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let message = e.to_string();
        match e {
            DomainError::ValidationError(_) | DomainError::InvalidParentMenu(_) | DomainError::UnknownSettingKey(_) => {
                ApiError::BadRequest(message)
            }
            DomainError::InvalidCredentials | DomainError::UserNotActive | DomainError::Unauthorized(_) => {
                ApiError::Unauthorized(message)
            }
            DomainError::PageNotInMenu(_) => ApiError::Forbidden(message),
            DomainError::NotFound { .. } | DomainError::PageNotFound(_) => ApiError::NotFound(message),
            DomainError::EmailAlreadyExists(_) | DomainError::SlugAlreadyExists(_) => ApiError::Conflict(message),
            DomainError::FileTooLarge { .. } => ApiError::PayloadTooLarge(message),
            DomainError::UnsupportedMediaType(_) => ApiError::UnsupportedMediaType(message),
            DomainError::ExternalServiceError(_) => ApiError::BadGateway(message),
            DomainError::StorageError(_)
            | DomainError::PasswordHashError(_)
            | DomainError::TokenGenerationError(_)
            | DomainError::DatabaseError(_)
            | DomainError::InternalError(_) => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() && status != StatusCode::BAD_GATEWAY {
            tracing::error!("{}: {}", self.code(), self);
            "Internal server error".to_string()
        } else {
            tracing::warn!("{}: {}", self.code(), self);
            self.to_string()
        };

        let body = Json(ApiResponse::<()>::error(self.code(), &message));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_domain_errors_map_to_status() {
        let cases = [
            (DomainError::ValidationError("title: is required".into()), StatusCode::BAD_REQUEST),
            (DomainError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (DomainError::PageNotInMenu("lama".into()), StatusCode::FORBIDDEN),
            (DomainError::not_found("Post", Uuid::new_v4()), StatusCode::NOT_FOUND),
            (DomainError::SlugAlreadyExists("posts_slug_key".into()), StatusCode::CONFLICT),
            (DomainError::FileTooLarge { size: 2, max: 1 }, StatusCode::PAYLOAD_TOO_LARGE),
            (DomainError::UnsupportedMediaType("text/html".into()), StatusCode::UNSUPPORTED_MEDIA_TYPE),
            (DomainError::ExternalServiceError("quota".into()), StatusCode::BAD_GATEWAY),
            (DomainError::DatabaseError("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (domain, status) in cases {
            assert_eq!(ApiError::from(domain).status(), status);
        }
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let response = ApiError::from(DomainError::DatabaseError("password=secret".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(!body["error"]["message"].as_str().unwrap().contains("secret"));
    }
}
