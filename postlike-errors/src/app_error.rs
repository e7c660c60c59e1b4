use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("No authenticated user on request")]
    InvalidIdentity,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::NotFound(_) => "The requested resource does not exist.",
            Self::StorageUnavailable(_) => "Service is temporarily unavailable. Try again later.",
            Self::InvalidIdentity => "Authentication required.",
            Self::InvalidConfig(_) => "Server is misconfigured.",
            Self::Internal(_) => "Something went wrong on the server.",
        }
    }

    /// Transient failures are worth retrying from the client side.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}

#[cfg(feature = "http")]
mod http_impl {
    use super::AppError;
    use axum::http::{header, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    /// Seconds a client should wait before retrying a transient failure.
    const RETRY_AFTER_SECS: &str = "1";

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::NotFound(_) => StatusCode::NOT_FOUND,
                AppError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                AppError::InvalidIdentity => StatusCode::UNAUTHORIZED,
                AppError::InvalidConfig(_) | AppError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            let message = self.user_message().to_string();
            let mut response = (status, Json(ErrorResponse { message })).into_response();
            if self.is_transient() {
                response.headers_mut().insert(
                    header::RETRY_AFTER,
                    header::HeaderValue::from_static(RETRY_AFTER_SECS),
                );
            }
            response
        }
    }
}
