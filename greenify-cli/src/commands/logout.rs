//! Logout command

use anyhow::Result;
use greenify_core::locale::t;
use greenify_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run() -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("logout"));

    let mut ctx = get_context()?;
    let was_authenticated = ctx.session.is_authenticated();
    ctx.session.logout()?;

    let lang = ctx.session.language();
    if was_authenticated {
        output::success(t("logout", lang));
    } else {
        output::info(t("logout", lang));
    }
    Ok(())
}
