use crate::identity::CurrentUser;
use crate::ApiState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use postlike_app::domain::LikeStatus;
use postlike_errors::AppError;

/// `POST /api/v1/posts/{post_id}/like`
pub async fn like_post(
    State(state): State<ApiState>,
    Path(post_id): Path<i64>,
    CurrentUser(user_id): CurrentUser,
) -> Result<StatusCode, AppError> {
    state.ctx.like_registry.like(post_id, user_id).await?;
    Ok(StatusCode::OK)
}

/// `DELETE /api/v1/posts/{post_id}/like`
pub async fn unlike_post(
    State(state): State<ApiState>,
    Path(post_id): Path<i64>,
    CurrentUser(user_id): CurrentUser,
) -> Result<StatusCode, AppError> {
    state.ctx.like_registry.unlike(post_id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/v1/posts/{post_id}/like`
pub async fn like_status(
    State(state): State<ApiState>,
    Path(post_id): Path<i64>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<LikeStatus>, AppError> {
    let status = state.ctx.like_registry.status(post_id, user_id).await?;
    Ok(Json(status))
}
