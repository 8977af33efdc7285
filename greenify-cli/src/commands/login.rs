//! Login command

use anyhow::Result;
use dialoguer::{Input, Password};
use greenify_core::locale::{format_greeting, t};
use greenify_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(email: Option<String>, password: Option<String>) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("login"));

    let mut ctx = get_context()?;
    let lang = ctx.session.language();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt(t("email", lang)).interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt(t("password", lang)).interact()?,
    };

    let user = ctx.session.login(email.trim(), &password)?;
    log_event(&logger, LogEvent::new("login").with_page(ctx.session.page().as_str()));

    output::success(&format_greeting(&user.name, lang));
    println!("  {}: {}  |  {}: {}", t("points", lang), user.points, t("tasksCompleted", lang), user.tasks_completed);
    Ok(())
}
