use crate::application::LikeRegistry;
use crate::infrastructure::db::{PostRepository, UserRepository};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub like_registry: Arc<LikeRegistry>,
    pub posts: PostRepository,
    pub users: UserRepository,
}

impl AppContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            like_registry: Arc::new(LikeRegistry::new(db.clone())),
            posts: PostRepository::new(db.clone()),
            users: UserRepository::new(db),
        }
    }
}
