use crate::ApiState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName};
use postlike_errors::AppError;

pub const DEFAULT_IDENTITY_HEADER: &str = "x-user-id";

/// Turns an already-authenticated request into a user id.
/// Authentication itself happens upstream.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, headers: &HeaderMap) -> Result<i64, AppError>;
}

/// Trusts a header set by the authenticating gateway in front of the service.
pub struct TrustedHeaderResolver {
    header: HeaderName,
}

impl TrustedHeaderResolver {
    pub fn new(header: HeaderName) -> Self {
        Self { header }
    }
}

impl Default for TrustedHeaderResolver {
    fn default() -> Self {
        Self::new(HeaderName::from_static(DEFAULT_IDENTITY_HEADER))
    }
}

impl IdentityResolver for TrustedHeaderResolver {
    fn resolve(&self, headers: &HeaderMap) -> Result<i64, AppError> {
        headers
            .get(&self.header)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<i64>().ok())
            .ok_or(AppError::InvalidIdentity)
    }
}

/// The caller's user id, resolved once per request.
pub struct CurrentUser(pub i64);

impl FromRequestParts<ApiState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ApiState,
    ) -> Result<Self, Self::Rejection> {
        state.identity.resolve(&parts.headers).map(CurrentUser)
    }
}
