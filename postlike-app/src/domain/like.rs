use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Like {
    pub fn new(post_id: i64, user_id: i64) -> Self {
        Self {
            post_id,
            user_id,
            created_at: chrono::Utc::now(),
        }
    }
}

/// What a `like` call did to the stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LikeOutcome {
    Created,
    AlreadyLiked,
}

/// What an `unlike` call did to the stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnlikeOutcome {
    Removed,
    NotLiked,
}

/// Like state of a post as seen by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeStatus {
    pub post_id: i64,
    pub liked: bool,
    pub like_count: u64,
}
