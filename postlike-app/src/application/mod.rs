mod like_registry;

pub use like_registry::LikeRegistry;
