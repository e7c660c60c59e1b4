use crate::domain::{LikeOutcome, LikeStatus, UnlikeOutcome};
use crate::infrastructure::db::{map_db_err, LikeRepository, PostRepository};
use postlike_errors::AppError;
use sea_orm::{DatabaseConnection, DbErr};

/// Owns the like relation between users and posts.
///
/// `like` and `unlike` are idempotent. Repeating either one never fails with
/// "already liked" or "not liked". Storage errors are passed through without
/// retrying.
#[derive(Clone)]
pub struct LikeRegistry {
    likes: LikeRepository,
    posts: PostRepository,
}

impl LikeRegistry {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            likes: LikeRepository::new(db.clone()),
            posts: PostRepository::new(db),
        }
    }

    pub async fn like(&self, post_id: i64, user_id: i64) -> Result<LikeOutcome, AppError> {
        self.ensure_post_exists(post_id).await?;

        // A missing user, or a post deleted since the check above, surfaces
        // here as a foreign key violation.
        let created = self
            .likes
            .insert_if_absent(post_id, user_id)
            .await
            .map_err(|e| storage_failure("like", post_id, user_id, e))?;

        if created {
            tracing::info!(post_id, user_id, "Post liked");
            Ok(LikeOutcome::Created)
        } else {
            tracing::debug!(post_id, user_id, "Post already liked");
            Ok(LikeOutcome::AlreadyLiked)
        }
    }

    pub async fn unlike(&self, post_id: i64, user_id: i64) -> Result<UnlikeOutcome, AppError> {
        self.ensure_post_exists(post_id).await?;

        let removed = self
            .likes
            .delete_if_present(post_id, user_id)
            .await
            .map_err(|e| storage_failure("unlike", post_id, user_id, e))?;

        if removed {
            tracing::info!(post_id, user_id, "Post unliked");
            Ok(UnlikeOutcome::Removed)
        } else {
            tracing::debug!(post_id, user_id, "Post was not liked");
            Ok(UnlikeOutcome::NotLiked)
        }
    }

    pub async fn status(&self, post_id: i64, user_id: i64) -> Result<LikeStatus, AppError> {
        self.ensure_post_exists(post_id).await?;

        let liked = self
            .likes
            .exists(post_id, user_id)
            .await
            .map_err(|e| storage_failure("status", post_id, user_id, e))?;
        let like_count = self.count(post_id).await?;

        Ok(LikeStatus {
            post_id,
            liked,
            like_count,
        })
    }

    pub async fn count(&self, post_id: i64) -> Result<u64, AppError> {
        self.likes.count_for_post(post_id).await.map_err(map_db_err)
    }

    async fn ensure_post_exists(&self, post_id: i64) -> Result<(), AppError> {
        if self.posts.exists(post_id).await.map_err(map_db_err)? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Post {}", post_id)))
        }
    }
}

fn storage_failure(op: &str, post_id: i64, user_id: i64, err: DbErr) -> AppError {
    let err = map_db_err(err);
    if !matches!(err, AppError::NotFound(_)) {
        tracing::warn!(op, post_id, user_id, error = %err, "Like storage call failed");
    }
    err
}
