//! # Database Pool Management
//!
//! Connection pool creation and configuration for SQLite.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Startup                                   │
//! │                                                                         │
//! │  DbConfig::new(path).startup_mode(mode)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  mode == Fresh? ──yes──► delete path, path-wal, path-shm (warn!)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SqlitePool (one connection, WAL, foreign keys not enforced)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Embedded migrations (CREATE ... IF NOT EXISTS)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database handle ──► passed to the shell, never global                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The application is single-user and synchronous from the user's side, so
//! the pool holds a single connection that lives as long as the process.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{FromRow, SqlitePool};
use std::ffi::OsString;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::product::ProductRepository;

const MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Startup Mode
// =============================================================================

/// What happens to an existing database file at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupMode {
    /// Discard any existing file and start with an empty dataset.
    Fresh,
    /// Open the existing file and keep its rows.
    #[default]
    Persistent,
}

impl fmt::Display for StartupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupMode::Fresh => f.write_str("fresh"),
            StartupMode::Persistent => f.write_str("persistent"),
        }
    }
}

impl FromStr for StartupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fresh" => Ok(StartupMode::Fresh),
            "persistent" => Ok(StartupMode::Persistent),
            other => Err(format!(
                "unknown startup mode '{}', expected 'fresh' or 'persistent'",
                other
            )),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("./music_store_management.db")
///     .startup_mode(StartupMode::Fresh);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Whether an existing file is discarded or kept.
    /// Default: Persistent
    pub startup_mode: StartupMode,

    /// Maximum number of connections in the pool.
    /// Default: 1
    pub max_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// The file is created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            startup_mode: StartupMode::default(),
            max_connections: 1,
            connect_timeout: Duration::from_secs(30),
        }
    }

    /// Sets the startup mode.
    pub fn startup_mode(mut self, mode: StartupMode) -> Self {
        self.startup_mode = mode;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Every `Database` built from this gets its own isolated database.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(MEMORY_PATH),
            startup_mode: StartupMode::Fresh,
            // In-memory requires single connection
            max_connections: 1,
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Whether this configuration points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == MEMORY_PATH
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let options = if self.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new()
                .filename(&self.database_path)
                // WAL mode: readers don't block the writer
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .create_if_missing(true)
        };

        // Deleting a product leaves inventory rows that reference it in place
        Ok(options.foreign_keys(false))
    }
}

// =============================================================================
// Schema Introspection
// =============================================================================

/// A table or index found in `sqlite_master`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct SchemaObject {
    /// `"table"` or `"index"`.
    #[sqlx(rename = "type")]
    pub kind: String,
    pub name: String,
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// Cloning is cheap (the pool is reference counted); every clone talks to
/// the same connection.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (or recreates) the database and applies migrations.
    ///
    /// ## What This Does
    /// 1. In fresh mode, deletes any existing database file
    /// 2. Configures SQLite (WAL, NORMAL synchronous, foreign keys off)
    /// 3. Creates the connection pool
    /// 4. Runs pending migrations
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            mode = %config.startup_mode,
            "Initializing database connection"
        );

        if config.startup_mode == StartupMode::Fresh && !config.is_in_memory() {
            discard_database_files(&config.database_path)?;
        }

        let connect_options = config.connect_options()?;
        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(config.connect_timeout)
            // The connection is held for the process lifetime; an in-memory
            // database would be lost if it were ever recycled.
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(max_connections = config.max_connections, "Database pool created");

        let db = Database { pool };
        db.run_migrations().await?;

        Ok(db)
    }

    /// Runs database migrations.
    ///
    /// Called by `new()`; already-applied migrations are skipped.
    pub async fn run_migrations(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await?;

        let (total, applied) = migrations::migration_status(&self.pool).await?;
        info!(total, applied, "Migrations complete");
        Ok(())
    }

    /// Returns a reference to the connection pool.
    ///
    /// Prefer using repository methods when available.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Lists the tables and indexes defined by the migrations.
    ///
    /// SQLite internals and the migration bookkeeping table are excluded.
    pub async fn schema_objects(&self) -> DbResult<Vec<SchemaObject>> {
        let objects = sqlx::query_as::<_, SchemaObject>(
            r#"
            SELECT type, name
            FROM sqlite_master
            WHERE type IN ('table', 'index')
              AND name NOT LIKE 'sqlite!_%' ESCAPE '!'
              AND name <> '_sqlx_migrations'
            ORDER BY type, name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(objects)
    }

    /// Closes the database connection pool.
    ///
    /// After calling close, all repository operations will fail.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

/// Deletes the database file and its WAL companions, if present.
fn discard_database_files(path: &Path) -> DbResult<()> {
    for suffix in ["", "-wal", "-shm"] {
        let mut file: OsString = path.as_os_str().to_owned();
        file.push(suffix);
        let file = PathBuf::from(file);

        match std::fs::remove_file(&file) {
            Ok(()) => warn!(path = %file.display(), "Discarded existing database file (fresh startup)"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(DbError::ResetFailed {
                    path: file.display().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
