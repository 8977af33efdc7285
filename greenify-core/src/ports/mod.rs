//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod registration_gateway;
mod session_store;
mod user_repository;

pub use registration_gateway::RegistrationGateway;
pub use session_store::{SessionStore, KEY_LANGUAGE, KEY_THEME, KEY_USER};
pub use user_repository::UserRepository;
