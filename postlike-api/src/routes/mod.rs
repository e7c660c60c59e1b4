mod post_like;

pub use post_like::{like_post, like_status, unlike_post};
