#![allow(dead_code)]

use alias_shortener::config::{Config, IN_MEMORY_STORAGE};
use alias_shortener::infrastructure::persistence::open_pool;
use alias_shortener::routes::router;
use alias_shortener::state::AppState;
use axum_test::TestServer;
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub fn test_config() -> Config {
    Config {
        storage_path: IN_MEMORY_STORAGE.to_string(),
        ..Config::default()
    }
}

pub async fn create_test_pool() -> SqlitePool {
    open_pool(&test_config()).await.unwrap()
}

/// File-backed pool as in production: WAL journal, several connections.
///
/// The database lives in `dir`, which must outlive the pool.
pub async fn create_file_pool(dir: &Path, max_connections: u32) -> SqlitePool {
    let config = Config {
        storage_path: dir.join("storage.db").to_string_lossy().into_owned(),
        db_max_connections: max_connections,
        ..Config::default()
    };
    open_pool(&config).await.unwrap()
}

pub async fn create_test_url(pool: &SqlitePool, alias: &str, url: &str) -> i64 {
    sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), &test_config(), CancellationToken::new())
}

/// Application routes and middleware over `pool`, served in process.
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}
