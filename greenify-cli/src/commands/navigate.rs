//! Navigate command - open a page, subject to the login guard

use anyhow::Result;
use greenify_core::locale::page_title;
use greenify_core::{LogEvent, Page};

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(page: &str) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("navigate"));

    let mut ctx = get_context()?;
    let lang = ctx.session.language();
    let requested: Page = page.parse()?;
    let shown = ctx.session.navigate(requested);
    log_event(&logger, LogEvent::new("page_opened").with_page(shown.as_str()));

    if shown != requested {
        output::warning(&format!(
            "{} → {}",
            page_title(requested, lang),
            page_title(shown, lang)
        ));
        println!("  gf login / gf register");
    } else {
        output::success(page_title(shown, lang));
    }
    Ok(())
}
