//! Identify command - "recognize" a plant from a photo

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use greenify_core::locale::t;
use greenify_core::services::ViewScope;
use greenify_core::LogEvent;
use indicatif::{ProgressBar, ProgressStyle};

use super::{get_context, get_logger, log_event, runtime};
use crate::output;

pub fn run(image: &Path, json: bool) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("identify"));

    let bytes = std::fs::read(image)
        .with_context(|| format!("Failed to read image {}", image.display()))?;

    let ctx = get_context()?;
    let lang = ctx.session.language();
    let plants = ctx.plants();

    let rt = runtime()?;
    let result = rt.block_on(async {
        let scope = ViewScope::new();
        let pending = plants.identify(&scope, &bytes)?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        spinner.set_message(t("loading", lang).to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = pending.wait().await;
        spinner.finish_and_clear();
        anyhow::Ok(result)
    })?;

    let Some(identification) = result else {
        anyhow::bail!("Identification was cancelled");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&identification)?);
        return Ok(());
    }

    let info = &identification.info;
    println!("{}", info.name.green().bold());
    let mut table = output::create_table();
    table.add_row(vec!["Family", info.family]);
    table.add_row(vec!["Water", info.water_needs]);
    table.add_row(vec!["Light", info.sunlight]);
    table.add_row(vec!["Toxicity", info.toxicity]);
    table.add_row(vec!["Benefits", info.ecological_benefits]);
    table.add_row(vec!["Similar".to_string(), info.similar_plants.join(", ")]);
    println!("{}", table);
    println!();
    output::bot(identification.chat_summary);
    Ok(())
}
