pub mod entities;
mod like_repository;
mod post_repository;
mod user_repository;

pub use like_repository::LikeRepository;
pub use post_repository::PostRepository;
pub use user_repository::UserRepository;

use postlike_errors::AppError;
use sea_orm::sqlx;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, RuntimeErr, Schema,
    SqlErr,
};
use std::time::Duration;

pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .sqlx_logging(false);

    Database::connect(opt).await
}

/// Creates any missing tables from the entity definitions for whichever
/// backend `db` is connected to.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // Parents before children so the foreign keys resolve.
    let tables = [
        schema.create_table_from_entity(entities::User),
        schema.create_table_from_entity(entities::Post),
        schema.create_table_from_entity(entities::PostLike),
    ];

    for mut table in tables {
        table.if_not_exists();
        db.execute(backend.build(&table)).await?;
    }

    Ok(())
}

/// Maps a storage error onto the application taxonomy.
pub fn map_db_err(err: DbErr) -> AppError {
    if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
        return AppError::NotFound("Referenced post or user".to_string());
    }

    match err {
        DbErr::Conn(e) => AppError::StorageUnavailable(e.to_string()),
        DbErr::ConnectionAcquire(e) => AppError::StorageUnavailable(e.to_string()),
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e))
            if is_unavailable(&e) =>
        {
            AppError::StorageUnavailable(e.to_string())
        }
        other => AppError::Internal(other.to_string()),
    }
}

/// Failures raised while a statement runs that say nothing about the
/// statement itself: lost sockets, an exhausted or closed pool, and a
/// database that is locked, shutting down or out of connections.
fn is_unavailable(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(db_err) => db_err
            .code()
            .is_some_and(|code| is_unavailable_code(&code)),
        _ => false,
    }
}

fn is_unavailable_code(code: &str) -> bool {
    match code {
        // SQLite SQLITE_BUSY / SQLITE_LOCKED and their extended codes
        "5" | "6" | "261" | "262" | "517" => true,
        // Postgres admin shutdown, crash shutdown, cannot connect now, too many connections
        "57P01" | "57P02" | "57P03" | "53300" => true,
        // Postgres connection exception class
        code => code.starts_with("08"),
    }
}
