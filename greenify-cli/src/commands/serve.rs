//! Serve command - run the registration gateway

use anyhow::Result;
use greenify_core::config::Config;
use greenify_core::server;
use greenify_core::{EntryPoint, LogEvent, LoggingService};

use super::{get_greenify_dir, runtime};

pub fn run(port: Option<u16>) -> Result<()> {
    server::init_tracing();

    let greenify_dir = get_greenify_dir()?;
    std::fs::create_dir_all(&greenify_dir)?;

    let mut config = Config::load(&greenify_dir)?;
    if let Some(port) = port {
        config.server_port = port;
    }

    let logger =
        LoggingService::new(&greenify_dir, EntryPoint::Server, env!("CARGO_PKG_VERSION")).ok();
    let log = |event: LogEvent| {
        if let Some(l) = &logger {
            let _ = l.log(event);
        }
    };

    log(LogEvent::new("server_started").with_command("serve"));
    let result = runtime()?.block_on(server::serve(&greenify_dir, &config));
    match &result {
        Ok(()) => log(LogEvent::new("server_stopped")),
        Err(e) => log(LogEvent::new("server_failed").with_error(format!("{:#}", e))),
    }
    result
}
