//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

pub mod chat;
pub mod deferred;
pub mod logging;
pub mod migration;
pub mod plant;
pub mod registration;
pub mod session;

pub use chat::{ChatService, ChatTopic};
pub use deferred::{Deferred, ViewScope};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use migration::{MigrationResult, MigrationService};
pub use plant::{Identification, PlantInfo, PlantService};
pub use registration::RegistrationService;
pub use session::SessionController;
