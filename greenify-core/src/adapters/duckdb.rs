//! DuckDB users table implementation

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use duckdb::types::Type;
use duckdb::{params, Connection};
use uuid::Uuid;

use crate::domain::RegisteredUser;
use crate::ports::UserRepository;
use crate::services::MigrationService;

/// Maximum number of retries when database file is locked
const MAX_RETRIES: u32 = 5;

/// Initial retry delay in milliseconds (doubles each retry: 50, 100, 200, 400, 800ms)
const INITIAL_RETRY_DELAY_MS: u64 = 50;

/// Check if an error message indicates a file locking issue that should be retried
fn is_retryable_error(err_msg: &str) -> bool {
    let lower = err_msg.to_lowercase();
    // Windows error messages
    lower.contains("being used by another process")
        || lower.contains("cannot access the file")
        // Unix/macOS error messages
        || lower.contains("resource temporarily unavailable")
        || lower.contains("database is locked")
        || lower.contains("file is already open")
}

/// Registered accounts stored in a DuckDB file
pub struct DuckDbUserRepository {
    conn: Mutex<Connection>,
}

impl DuckDbUserRepository {
    /// Open the users database at `db_path`
    ///
    /// Retries with exponential backoff on file locking errors, which happen
    /// when a second gateway process starts against the same file.
    pub fn new(db_path: &Path) -> Result<Self> {
        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            match Self::try_open_connection(db_path) {
                Ok(conn) => {
                    return Ok(Self {
                        conn: Mutex::new(conn),
                    });
                }
                Err(e) => {
                    let err_msg = e.to_string();
                    if is_retryable_error(&err_msg) && attempt < MAX_RETRIES - 1 {
                        let delay =
                            Duration::from_millis(INITIAL_RETRY_DELAY_MS * 2u64.pow(attempt));
                        tracing::warn!(
                            "Users database busy, retrying in {}ms (attempt {}/{}): {}",
                            delay.as_millis(),
                            attempt + 1,
                            MAX_RETRIES,
                            err_msg
                        );
                        thread::sleep(delay);
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| anyhow!("Failed to open database after {} retries", MAX_RETRIES)))
    }

    /// In-memory database, gone when dropped
    pub fn open_in_memory() -> Result<Self> {
        let config = duckdb::Config::default().enable_autoload_extension(false)?;
        let conn = Connection::open_in_memory_with_flags(config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn try_open_connection(db_path: &Path) -> Result<Connection> {
        // Extension autoloading stays off: nothing here needs one, and cached
        // extensions in ~/.duckdb can fail code signing on macOS.
        let config = duckdb::Config::default().enable_autoload_extension(false)?;
        Ok(Connection::open_with_flags(db_path, config)?)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| anyhow!("Lock poisoned: {}", e))
    }

    /// Run database migrations using the MigrationService
    pub fn run_migrations(&self) -> Result<crate::services::MigrationResult> {
        let conn = self.conn()?;
        MigrationService::new(&conn).run_pending()
    }

    /// Ensure database schema exists (runs pending migrations)
    pub fn ensure_schema(&self) -> Result<()> {
        self.run_migrations()?;
        Ok(())
    }

    fn row_to_user(row: &duckdb::Row) -> duckdb::Result<RegisteredUser> {
        // 0: id, 1: name, 2: email, 3: password_hash, 4: created_at
        let id_str: String = row.get(0)?;
        let created_str: String = row.get(4)?;

        Ok(RegisteredUser {
            id: Uuid::parse_str(&id_str)
                .map_err(|e| duckdb::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?,
            name: row.get(1)?,
            email: row.get(2)?,
            password_hash: row.get(3)?,
            created_at: parse_timestamp(&created_str)
                .map_err(|e| duckdb::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?,
        })
    }
}

impl UserRepository for DuckDbUserRepository {
    fn insert_user(&self, user: &RegisteredUser) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO users (id, name, email, password_hash, created_at) VALUES (?, ?, ?, ?, ?)",
            params![
                user.id.to_string(),
                &user.name,
                &user.email,
                &user.password_hash,
                user.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Result<Vec<RegisteredUser>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, email, password_hash, created_at
             FROM users WHERE email = ? ORDER BY created_at",
        )?;

        let users = stmt
            .query_map([email], Self::row_to_user)?
            .collect::<duckdb::Result<Vec<_>>>()?;

        Ok(users)
    }

    fn count_users(&self) -> Result<u64> {
        let conn = self.conn()?;
        let count: u64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}
