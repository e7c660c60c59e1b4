use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use fake::faker::internet::en::Username;
use fake::Fake;
use postlike_api::identity::{TrustedHeaderResolver, DEFAULT_IDENTITY_HEADER};
use postlike_api::{router, ApiState};
use postlike_app::domain::{Post, User};
use postlike_app::infrastructure::db::{create_connection, run_migrations};
use postlike_app::AppContext;
use sea_orm::DatabaseConnection;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;

static USER_SEQ: AtomicUsize = AtomicUsize::new(0);

pub struct TestApp {
    pub server: TestServer,
    pub ctx: AppContext,
    pub db: DatabaseConnection,
    _dir: TempDir,
}

// each test binary only uses some of these helpers
#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::with_timeout(Duration::from_secs(10)).await
    }

    pub async fn with_timeout(request_timeout: Duration) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("api.db").display());
        let db = create_connection(&url).await.expect("failed to connect");
        run_migrations(&db).await.expect("migrations run");

        let ctx = AppContext::new(db.clone());
        let state = ApiState::new(ctx.clone(), TrustedHeaderResolver::default());
        let server = TestServer::new(router(state, request_timeout))
            .expect("Failed to create test server");

        Self {
            server,
            ctx,
            db,
            _dir: dir,
        }
    }

    pub async fn create_user(&self) -> User {
        let seq = USER_SEQ.fetch_add(1, Ordering::Relaxed);
        let username = format!("{}_{}", Username().fake::<String>(), seq);
        self.ctx.users.create(&username).await.expect("user created")
    }

    pub async fn create_post(&self, author: &User) -> Post {
        self.ctx
            .posts
            .create(author.id, "a post worth liking")
            .await
            .expect("post created")
    }
}

pub fn like_path(post_id: i64) -> String {
    format!("/api/v1/posts/{}/like", post_id)
}

pub fn as_user(user_id: i64) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(DEFAULT_IDENTITY_HEADER),
        HeaderValue::from(user_id),
    )
}
