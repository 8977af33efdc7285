//! Migration service - applies embedded SQL migrations to a DuckDB file
//!
//! Both the users database and the log database are migrated through here.
//! Applied names are recorded in `sys_migrations`, so running twice is a no-op.

use anyhow::Result;
use duckdb::Connection;

use crate::migrations::MIGRATIONS;

/// Name of the migration that creates `sys_migrations` itself
const BOOTSTRAP: &str = "000_migrations.sql";

/// Outcome of [`MigrationService::run_pending`]
#[derive(Debug)]
pub struct MigrationResult {
    /// Names of migrations applied by this run
    pub applied: Vec<String>,
    /// How many were already in place before this run
    pub already_applied: usize,
}

pub struct MigrationService<'a> {
    conn: &'a Connection,
    migrations: &'static [(&'static str, &'static str)],
}

impl<'a> MigrationService<'a> {
    /// Migrate the users database
    pub fn new(conn: &'a Connection) -> Self {
        Self::with_migrations(conn, MIGRATIONS)
    }

    /// Migrate with an arbitrary ordered list of `(file name, sql)` pairs
    pub fn with_migrations(
        conn: &'a Connection,
        migrations: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { conn, migrations }
    }

    /// Apply every migration not yet recorded, in list order
    pub fn run_pending(&self) -> Result<MigrationResult> {
        let mut applied = Vec::new();

        if !self.migrations_table_exists()? {
            if let Some((name, sql)) = self.migrations.iter().find(|(n, _)| *n == BOOTSTRAP) {
                self.conn.execute_batch(sql)?;
                self.record_migration(name)?;
                applied.push(name.to_string());
            }
        }

        let recorded = self.get_applied()?;
        let already_applied = recorded.len().saturating_sub(applied.len());

        for (name, sql) in self.migrations.iter().filter(|(n, _)| *n != BOOTSTRAP) {
            if recorded.iter().any(|r| r == name) {
                continue;
            }
            self.conn.execute_batch(sql)?;
            self.record_migration(name)?;
            applied.push(name.to_string());
        }

        Ok(MigrationResult {
            applied,
            already_applied,
        })
    }

    fn migrations_table_exists(&self) -> Result<bool> {
        let count: duckdb::Result<i64> = self.conn.query_row(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = 'sys_migrations'",
            [],
            |row| row.get(0),
        );
        Ok(matches!(count, Ok(n) if n > 0))
    }

    /// Names already recorded, sorted
    pub fn get_applied(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT migration_name FROM sys_migrations ORDER BY migration_name")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<duckdb::Result<Vec<_>>>()?;
        Ok(names)
    }

    /// Names not yet recorded, in list order
    pub fn get_pending(&self) -> Result<Vec<String>> {
        let applied = if self.migrations_table_exists()? {
            self.get_applied()?
        } else {
            Vec::new()
        };
        Ok(self
            .migrations
            .iter()
            .map(|(name, _)| name.to_string())
            .filter(|name| !applied.contains(name))
            .collect())
    }

    fn record_migration(&self, name: &str) -> Result<()> {
        self.conn
            .execute("INSERT INTO sys_migrations (migration_name) VALUES (?)", [name])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_migrations::LOG_MIGRATIONS;

    #[test]
    fn test_users_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        let service = MigrationService::new(&conn);

        let first = service.run_pending().unwrap();
        assert_eq!(first.applied.len(), MIGRATIONS.len());
        assert_eq!(first.already_applied, 0);

        let second = service.run_pending().unwrap();
        assert!(second.applied.is_empty());
        assert_eq!(second.already_applied, MIGRATIONS.len());
    }

    #[test]
    fn test_pending_before_and_after() {
        let conn = Connection::open_in_memory().unwrap();
        let service = MigrationService::new(&conn);

        assert_eq!(service.get_pending().unwrap().len(), MIGRATIONS.len());
        service.run_pending().unwrap();
        assert!(service.get_pending().unwrap().is_empty());
    }

    #[test]
    fn test_log_migrations_share_the_mechanism() {
        let conn = Connection::open_in_memory().unwrap();
        let service = MigrationService::with_migrations(&conn, LOG_MIGRATIONS);

        let result = service.run_pending().unwrap();
        assert_eq!(result.applied, vec!["000_migrations.sql", "001_initial_schema.sql"]);

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM sys_logs", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
