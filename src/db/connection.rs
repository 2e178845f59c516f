// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use crate::db::migrations::initialize_database;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Overrides the default database location
pub const ENV_DB_PATH: &str = "CINEHUB_DB_PATH";

/// Get the database file path
///
/// `CINEHUB_DB_PATH` wins when set; otherwise {APP_DATA}/cinehub/cinehub.db
pub fn get_database_path() -> AppResult<PathBuf> {
    if let Some(path) = std::env::var_os(ENV_DB_PATH).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    let cinehub_dir = app_data_dir.join("cinehub");
    std::fs::create_dir_all(&cinehub_dir)?;

    Ok(cinehub_dir.join("cinehub.db"))
}

/// Create a connection pool over the database file at `db_path`
///
/// The schema is initialized before the pool is returned.
pub fn create_connection_pool(db_path: &Path) -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(4)
        .build(manager)
        .map_err(|e| AppError::Other(format!("Failed to create connection pool: {}", e)))?;

    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
    }

    Ok(pool)
}

/// Create a single-connection pool over an in-memory database
///
/// Each in-memory connection is its own database, so the pool is capped at one.
pub fn create_memory_pool() -> AppResult<ConnectionPool> {
    let pool = Pool::builder()
        .max_size(1)
        .build(SqliteConnectionManager::memory())
        .map_err(|e| AppError::Other(format!("Failed to create connection pool: {}", e)))?;

    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
    }

    Ok(pool)
}

/// Get a connection from the pool
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Other(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone in-memory connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory().map_err(AppError::Database)?;
    Ok(conn)
}
