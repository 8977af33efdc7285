//! Register command - create an account through the gateway

use std::time::Duration;

use anyhow::Result;
use dialoguer::{Input, Password};
use greenify_core::domain::RegistrationForm;
use greenify_core::locale::{format_greeting, t};
use greenify_core::{Error, LogEvent};
use indicatif::{ProgressBar, ProgressStyle};

use super::{get_context, get_logger, log_event, runtime};
use crate::output;

pub fn run(name: Option<String>, email: Option<String>, password: Option<String>) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("register"));

    let mut ctx = get_context()?;
    let lang = ctx.session.language();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt(t("name", lang)).interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt(t("email", lang)).interact_text()?,
    };
    // A password given on the command line counts as already confirmed
    let (password, confirm_password) = match password {
        Some(p) => (p.clone(), p),
        None => (
            Password::new().with_prompt(t("password", lang)).interact()?,
            Password::new().with_prompt(t("confirmPassword", lang)).interact()?,
        ),
    };

    let form = RegistrationForm {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password,
        confirm_password,
    };
    if let Err(e) = form.validate(lang) {
        log_event(&logger, LogEvent::new("register_rejected").with_error(e.to_string()));
        return Err(e.into());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(t("loading", lang).to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = runtime()?.block_on(ctx.session.register(&form.name, &form.email, &form.password));
    spinner.finish_and_clear();

    match result {
        Ok(user) => {
            log_event(&logger, LogEvent::new("register_succeeded"));
            output::success(t("registeredOk", lang));
            output::success(&format_greeting(&user.name, lang));
            Ok(())
        }
        Err(Error::Gateway(message)) => {
            log_event(&logger, LogEvent::new("register_failed").with_error(message.as_str()));
            anyhow::bail!(message)
        }
        Err(e) => {
            log_event(&logger, LogEvent::new("register_failed").with_error(e.to_string()));
            Err(e.into())
        }
    }
}
