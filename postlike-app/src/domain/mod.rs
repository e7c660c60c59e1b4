mod like;
mod post;
mod user;

pub use like::{Like, LikeOutcome, LikeStatus, UnlikeOutcome};
pub use post::Post;
pub use user::User;
