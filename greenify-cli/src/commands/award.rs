//! Award command - credit points for completed tasks

use anyhow::Result;
use greenify_core::locale::t;
use greenify_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(points: u32, tasks: u32) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("award"));

    let mut ctx = get_context()?;
    let lang = ctx.session.language();

    if !ctx.session.is_authenticated() {
        output::warning(&format!("{}: gf login", t("login", lang)));
        return Ok(());
    }

    ctx.session.award_points(points, tasks)?;
    for note in ctx.session.take_notifications() {
        output::notification(&note);
    }

    if let Some(user) = ctx.session.user() {
        println!(
            "  {}: {}  |  {}: {}",
            t("points", lang),
            user.points,
            t("tasksCompleted", lang),
            user.tasks_completed
        );
    }
    Ok(())
}
