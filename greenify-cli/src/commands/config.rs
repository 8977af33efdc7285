//! Config command - show or change settings.json

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use greenify_core::config::{Config, SETTINGS_FILE};
use greenify_core::LogEvent;

use super::{get_greenify_dir, get_logger, log_event};
use crate::output;

/// Settings to change; all `None` shows the effective configuration
#[derive(Debug, Default)]
pub struct ConfigChanges {
    pub gateway_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub port: Option<u16>,
    pub database: Option<String>,
}

impl ConfigChanges {
    fn is_empty(&self) -> bool {
        self.gateway_url.is_none()
            && self.timeout_secs.is_none()
            && self.port.is_none()
            && self.database.is_none()
    }
}

pub fn run(changes: ConfigChanges) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("config"));

    let greenify_dir = get_greenify_dir()?;

    if changes.is_empty() {
        let config = Config::load(&greenify_dir)?;
        print_config(&config, &greenify_dir);
        return Ok(());
    }

    // Environment overrides stay out of the file.
    let mut config = Config::load_with_env(&greenify_dir, |_| None)?;
    if let Some(url) = changes.gateway_url {
        config.gateway_url = url;
    }
    if let Some(secs) = changes.timeout_secs {
        config.gateway_timeout = Duration::from_secs(secs);
    }
    if let Some(port) = changes.port {
        config.server_port = port;
    }
    if let Some(database) = changes.database {
        config.database = database;
    }
    config.save(&greenify_dir)?;

    output::success(&format!(
        "Saved {}",
        greenify_dir.join(SETTINGS_FILE).display()
    ));
    print_config(&config, &greenify_dir);
    Ok(())
}

fn print_config(config: &Config, greenify_dir: &Path) {
    let mut table = output::create_table();
    table.add_row(vec!["Gateway URL".to_string(), config.gateway_url.clone()]);
    table.add_row(vec![
        "Gateway timeout".to_string(),
        format!("{}s", config.gateway_timeout.as_secs()),
    ]);
    table.add_row(vec!["Server port".to_string(), config.server_port.to_string()]);
    table.add_row(vec![
        "Users database".to_string(),
        config.database_path(greenify_dir).display().to_string(),
    ]);
    println!("{}", table);
}
