pub mod config;
pub mod identity;
pub mod routes;

use axum::http::StatusCode;
use axum::{routing::post, Router};
use identity::IdentityResolver;
use postlike_app::AppContext;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct ApiState {
    pub ctx: AppContext,
    pub identity: Arc<dyn IdentityResolver>,
}

impl ApiState {
    pub fn new(ctx: AppContext, identity: impl IdentityResolver + 'static) -> Self {
        Self {
            ctx,
            identity: Arc::new(identity),
        }
    }
}

pub fn router(state: ApiState, request_timeout: Duration) -> Router {
    Router::new()
        .route(
            "/api/v1/posts/{post_id}/like",
            post(routes::like_post)
                .delete(routes::unlike_post)
                .get(routes::like_status),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::SERVICE_UNAVAILABLE,
                    request_timeout,
                )),
        )
        .with_state(state)
}
