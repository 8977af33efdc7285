//! User repository port - the relational users table behind the gateway

use anyhow::Result;

use crate::domain::RegisteredUser;

/// Storage of registered accounts
pub trait UserRepository: Send + Sync {
    /// Append one row. No uniqueness is enforced on email.
    fn insert_user(&self, user: &RegisteredUser) -> Result<()>;

    /// All rows with the given email, oldest first
    fn find_by_email(&self, email: &str) -> Result<Vec<RegisteredUser>>;

    /// Number of rows in the table
    fn count_users(&self) -> Result<u64>;
}
