//! Schema of the users database behind the registration gateway
//!
//! Each entry is `(file name, sql)`. Append new files here in name order;
//! already-applied names are skipped.

pub const MIGRATIONS: &[(&str, &str)] = &[
    ("000_migrations.sql", include_str!("000_migrations.sql")),
    ("001_users.sql", include_str!("001_users.sql")),
];
