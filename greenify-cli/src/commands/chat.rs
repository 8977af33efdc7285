//! Chat command - ask the plant-care assistant
//!
//! With a message: one answer. Without: a conversation that ends on an empty
//! line or `exit`.

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;
use greenify_core::services::ViewScope;
use greenify_core::LogEvent;
use indicatif::ProgressBar;

use super::{get_context, get_logger, log_event, runtime};
use crate::output;

pub fn run(message: Option<String>) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("chat"));

    let ctx = get_context()?;
    let chat = ctx.chat();
    let rt = runtime()?;
    let _guard = rt.enter();
    let scope = ViewScope::new();

    let ask = |text: &str| -> Result<()> {
        let Some(pending) = chat.reply_after(&scope, text) else {
            return Ok(());
        };
        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(100));
        let reply = rt.block_on(pending.wait());
        spinner.finish_and_clear();
        if let Some(reply) = reply {
            output::bot(reply);
        }
        Ok(())
    };

    if let Some(message) = message {
        return ask(&message);
    }

    output::bot(chat.welcome());
    loop {
        let line: String = Input::new()
            .with_prompt(">".green().to_string())
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("exit") {
            break;
        }
        ask(line)?;
    }
    Ok(())
}
