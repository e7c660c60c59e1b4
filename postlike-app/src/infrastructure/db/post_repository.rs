use super::entities::{post, Post};
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr, PaginatorTrait};

#[derive(Clone)]
pub struct PostRepository {
    db: DatabaseConnection,
}

impl PostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DbErr> {
        let count = Post::find()
            .filter(post::Column::Id.eq(id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    pub async fn create(&self, author_id: i64, title: &str) -> Result<crate::domain::Post, DbErr> {
        let active = post::ActiveModel {
            author_id: Set(author_id),
            title: Set(title.to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };
        active.insert(&self.db).await.map(Into::into)
    }
}
