//! Schema of `logs.duckdb`, kept apart from the users database

/// Ordered `(file name, sql)` pairs, applied by `MigrationService::with_migrations`
pub const LOG_MIGRATIONS: &[(&str, &str)] = &[
    ("000_migrations.sql", include_str!("000_migrations.sql")),
    ("001_initial_schema.sql", include_str!("001_initial_schema.sql")),
];
