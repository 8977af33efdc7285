//! Status command - current user, progress and preferences

use anyhow::Result;
use colored::Colorize;
use greenify_core::locale::{page_title, t};
use greenify_core::{OperationResult, Page, Preferences, Theme, User};
use serde::Serialize;

use super::get_context;
use crate::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusView {
    authenticated: bool,
    user: Option<User>,
    preferences: Preferences,
    gateway_url: String,
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let session = &ctx.session;
    let lang = session.language();

    if json {
        let view = StatusView {
            authenticated: session.is_authenticated(),
            user: session.user().cloned(),
            preferences: session.preferences(),
            gateway_url: ctx.config.gateway_url.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(view))?);
        return Ok(());
    }

    println!("{}", "Greenify".green().bold());
    println!();

    let mut table = output::create_table();
    match session.user() {
        Some(user) => {
            table.add_row(vec![t("name", lang), user.name.as_str()]);
            table.add_row(vec![t("email", lang), user.email.as_str()]);
            table.add_row(vec![t("points", lang).to_string(), user.points.to_string()]);
            table.add_row(vec![
                t("tasksCompleted", lang).to_string(),
                user.tasks_completed.to_string(),
            ]);
        }
        None => {
            table.add_row(vec![t("profile", lang), "-"]);
        }
    }
    let theme_label = match session.theme() {
        Theme::Dark => t("darkMode", lang),
        Theme::Light => t("lightMode", lang),
    };
    table.add_row(vec!["Theme", theme_label]);
    table.add_row(vec!["Language", lang.code()]);
    println!("{}", table);

    if !session.is_authenticated() {
        println!();
        output::info(&format!(
            "{}: gf login  |  {}: gf register",
            page_title(Page::Login, lang),
            page_title(Page::Register, lang)
        ));
    }

    Ok(())
}
