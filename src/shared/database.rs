use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::env;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Per-connection SQLite setup. Pooled connections are long-lived, so the
/// pragmas only run when a connection is first established.
#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(
            "PRAGMA busy_timeout = 5000; \
             PRAGMA journal_mode = WAL; \
             PRAGMA synchronous = NORMAL; \
             PRAGMA foreign_keys = ON;",
        )
        .map_err(r2d2::Error::QueryError)
    }
}

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Open (or create) the store at `database_url` and run pending migrations.
    pub fn open(database_url: &str) -> AppResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);

        let pool_config = Self::pool_config(database_url);
        let pool = r2d2::Pool::builder()
            .max_size(pool_config.max_size)
            .min_idle(Some(pool_config.min_idle))
            .connection_timeout(Duration::from_secs(10))
            .idle_timeout(None)
            .max_lifetime(None)
            .connection_customizer(Box::new(ConnectionOptions))
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        let db = Self { pool };
        db.run_migrations()?;

        log_info!(
            "Store opened at {} (pool max_size: {})",
            database_url,
            db.pool.max_size()
        );

        Ok(db)
    }

    /// Open the store at the path named by `DATABASE_URL`.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        let database_url = env::var("DATABASE_URL").map_err(|_| {
            AppError::DatabaseError("DATABASE_URL environment variable not found".to_string())
        })?;
        Self::open(&database_url)
    }

    /// Process-lifetime store handle, constructed from the environment on
    /// first access. Guarded so concurrent first callers still end up
    /// sharing a single instance; a failed construction is not cached and
    /// the next caller retries.
    pub fn shared() -> AppResult<Arc<Database>> {
        static SHARED: Mutex<Option<Arc<Database>>> = Mutex::new(None);

        let mut guard = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(db) = guard.as_ref() {
            return Ok(db.clone());
        }

        let db = Arc::new(Self::from_env()?);
        *guard = Some(db.clone());
        Ok(db)
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    fn run_migrations(&self) -> AppResult<()> {
        let mut conn = self.get_connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;
        Ok(())
    }

    fn pool_config(database_url: &str) -> PoolConfig {
        // Every connection to a `:memory:` URL opens a distinct database, so
        // the pool must hand out the same single connection.
        if database_url.contains(":memory:") {
            return PoolConfig {
                max_size: 1,
                min_idle: 1,
            };
        }

        // SQLite serializes writers anyway; a small pool only needs to cover
        // concurrent readers.
        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        let max_size = std::cmp::min(cpu_count, 8);

        PoolConfig {
            max_size: max_size as u32,
            min_idle: 1,
        }
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        self.pool.get().map_err(AppError::from)
    }

    /// Get the underlying connection pool (useful for testing and repository initialization)
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[derive(Debug)]
struct PoolConfig {
    max_size: u32,
    min_idle: u32,
}
