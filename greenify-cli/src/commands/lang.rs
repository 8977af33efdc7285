//! Lang command - switch the site language

use anyhow::Result;
use greenify_core::locale::page_title;
use greenify_core::{Language, LogEvent, Page};

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(code: &str) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("lang"));

    let language: Language = code.trim().to_lowercase().parse()?;
    let mut ctx = get_context()?;
    ctx.session.set_language(language)?;

    output::success(&format!("{} ({})", page_title(Page::Home, language), language));
    Ok(())
}
