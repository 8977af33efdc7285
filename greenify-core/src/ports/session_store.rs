//! Session store port - durable local key/value text storage

use crate::domain::result::Result;

/// Key of the serialized active user
pub const KEY_USER: &str = "ecoUser";
/// Key of the theme flag (`dark` / `light`)
pub const KEY_THEME: &str = "theme";
/// Key of the language code (`az` / `en` / `ru`)
pub const KEY_LANGUAGE: &str = "language";

/// Durable per-profile storage of text values
///
/// Scoped to one local profile and never synced across devices. Each call is
/// atomic on its own; there is no multi-key transaction.
pub trait SessionStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Read the value under `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Delete `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}
