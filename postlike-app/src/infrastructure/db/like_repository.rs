use super::entities::{post_like, PostLike};
use crate::domain::Like;
use sea_orm::sea_query::OnConflict;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr, PaginatorTrait};

/// Storage for `post_likes` rows.
///
/// Both mutations are single statements keyed on the composite primary key,
/// so concurrent callers never need an application-level lock and a dropped
/// request never leaves a half-written row.
#[derive(Clone)]
pub struct LikeRepository {
    db: DatabaseConnection,
}

impl LikeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, post_id: i64, user_id: i64) -> Result<Option<Like>, DbErr> {
        let row = PostLike::find_by_id((post_id, user_id)).one(&self.db).await?;
        Ok(row.map(Into::into))
    }

    pub async fn exists(&self, post_id: i64, user_id: i64) -> Result<bool, DbErr> {
        Ok(self.find(post_id, user_id).await?.is_some())
    }

    /// Inserts the row unless the pair is already present.
    /// Returns `true` only for the caller whose insert actually landed.
    pub async fn insert_if_absent(&self, post_id: i64, user_id: i64) -> Result<bool, DbErr> {
        let like = Like::new(post_id, user_id);
        let active = post_like::ActiveModel {
            post_id: Set(like.post_id),
            user_id: Set(like.user_id),
            created_at: Set(like.created_at),
        };

        let inserted = PostLike::insert(active)
            .on_conflict(
                OnConflict::columns([post_like::Column::PostId, post_like::Column::UserId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(inserted > 0)
    }

    /// Deletes the row if present. Returns `true` only if a row was removed.
    pub async fn delete_if_present(&self, post_id: i64, user_id: i64) -> Result<bool, DbErr> {
        let result = PostLike::delete_many()
            .filter(post_like::Column::PostId.eq(post_id))
            .filter(post_like::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count_for_post(&self, post_id: i64) -> Result<u64, DbErr> {
        PostLike::find()
            .filter(post_like::Column::PostId.eq(post_id))
            .count(&self.db)
            .await
    }
}
