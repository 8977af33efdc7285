//! Greenify Core - session, registration and plant-care logic for the Greenify eco site
//!
//! This crate follows a hexagonal layout:
//!
//! - **domain**: users, pages, preferences, registration payloads
//! - **ports**: traits for the session store, the registration gateway and the users table
//! - **services**: session controller, registration, chat, plant identification, logging
//! - **adapters**: file/memory stores, HTTP gateway client, DuckDB users table
//! - **server**: the `POST /api/register` HTTP endpoint

pub mod adapters;
pub mod config;
pub mod domain;
pub mod locale;
pub mod log_migrations;
pub mod migrations;
pub mod ports;
pub mod server;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use adapters::{FileSessionStore, HttpRegistrationGateway};
use config::Config;
use services::{ChatService, PlantService, SessionController};

pub use domain::result::{Error, OperationResult};
pub use domain::{Language, Notification, Page, Preferences, Theme, User};
pub use services::{EntryPoint, LogEvent, LoggingService};

/// Everything a front end needs for one invocation
///
/// Session state is read from `storage.json` in the Greenify directory and
/// registration goes to the gateway configured in `settings.json`.
pub struct GreenifyContext {
    pub config: Config,
    pub session: SessionController,
    greenify_dir: PathBuf,
}

impl GreenifyContext {
    pub fn new(greenify_dir: &Path) -> Result<Self> {
        let config = Config::load(greenify_dir)?;

        let store = Arc::new(FileSessionStore::new(greenify_dir)?);
        let gateway = Arc::new(HttpRegistrationGateway::new(
            &config.gateway_url,
            config.gateway_timeout,
        )?);
        let session = SessionController::load(store, gateway)?;

        Ok(Self {
            config,
            session,
            greenify_dir: greenify_dir.to_path_buf(),
        })
    }

    pub fn greenify_dir(&self) -> &Path {
        &self.greenify_dir
    }

    /// Chat in the current site language
    pub fn chat(&self) -> ChatService {
        ChatService::new(self.session.language())
    }

    /// Identification in the current site language
    pub fn plants(&self) -> PlantService {
        PlantService::new(self.session.language())
    }
}
