//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

pub mod credentials;
mod notification;
mod page;
mod preferences;
pub mod registration;
pub mod result;
mod user;

pub use credentials::Argon2Params;
pub use notification::Notification;
pub use page::Page;
pub use preferences::{Language, Preferences, Theme};
pub use registration::{RegisteredUser, RegistrationForm, RegistrationRequest, RegistrationResponse};
pub use user::User;
