//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - JSON file and in-memory maps for the SessionStore port
//! - reqwest HTTP client for the RegistrationGateway port
//! - DuckDB for the UserRepository port

pub mod duckdb;
pub mod file_store;
pub mod http_gateway;
pub mod memory_store;

pub use self::duckdb::DuckDbUserRepository;
pub use file_store::FileSessionStore;
pub use http_gateway::HttpRegistrationGateway;
pub use memory_store::MemorySessionStore;
