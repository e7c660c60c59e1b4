use super::entities::user;
use sea_orm::{entity::*, DatabaseConnection, DbErr};

#[derive(Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, username: &str) -> Result<crate::domain::User, DbErr> {
        let active = user::ActiveModel {
            username: Set(username.to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };
        active.insert(&self.db).await.map(Into::into)
    }
}
