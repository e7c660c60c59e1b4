use postlike_api::config::Config;
use postlike_api::identity::TrustedHeaderResolver;
use postlike_api::{router, ApiState};
use postlike_app::infrastructure::db::{create_connection, run_migrations};
use postlike_app::AppContext;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let db = match create_connection(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if config.run_migrations {
        if let Err(e) = run_migrations(&db).await {
            tracing::error!("Failed to run migrations: {}", e);
            std::process::exit(1);
        }
        tracing::info!("Database schema ready");
    }

    let state = ApiState::new(
        AppContext::new(db),
        TrustedHeaderResolver::new(config.identity_header.clone()),
    );
    let app = router(state, config.request_timeout);

    tracing::info!("Listening on http://{}", config.server_addr);
    tracing::info!("Caller identity read from header {}", config.identity_header);

    let listener = tokio::net::TcpListener::bind(config.server_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
