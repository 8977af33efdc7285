//! CLI command implementations

pub mod award;
pub mod chat;
pub mod config;
pub mod identify;
pub mod lang;
pub mod login;
pub mod logout;
pub mod logs;
pub mod navigate;
pub mod register;
pub mod serve;
pub mod status;
pub mod theme;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use greenify_core::{EntryPoint, GreenifyContext, LogEvent, LoggingService};
use tokio::runtime::Runtime;

/// Logging service for CLI commands, `None` if it could not be opened.
/// A broken log database never stops a command.
pub fn get_logger() -> Option<LoggingService> {
    let greenify_dir = get_greenify_dir().ok()?;
    std::fs::create_dir_all(&greenify_dir).ok()?;
    LoggingService::new(&greenify_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring failures
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// `GREENIFY_DIR`, or `~/.greenify`
pub fn get_greenify_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("GREENIFY_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".greenify"))
        .ok_or_else(|| anyhow!("Could not find home directory; set GREENIFY_DIR"))
}

/// Load session state and settings for this invocation
pub fn get_context() -> Result<GreenifyContext> {
    let greenify_dir = get_greenify_dir()?;
    std::fs::create_dir_all(&greenify_dir)
        .with_context(|| format!("Failed to create Greenify directory: {:?}", greenify_dir))?;

    GreenifyContext::new(&greenify_dir).context("Failed to initialize Greenify")
}

/// Runtime for commands that wait on the network or on timers
pub fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
