//! Theme command - toggle dark/light

use anyhow::Result;
use greenify_core::locale::t;
use greenify_core::{LogEvent, Theme};

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run() -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("theme"));

    let mut ctx = get_context()?;
    let theme = ctx.session.toggle_theme()?;
    let lang = ctx.session.language();

    output::success(match theme {
        Theme::Dark => t("darkMode", lang),
        Theme::Light => t("lightMode", lang),
    });
    Ok(())
}
