//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use greenify_core::Notification;

pub fn success(msg: &str) {
    println!("{}", msg.green());
}

pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Print a toast: bold green title, dimmed description underneath
pub fn notification(note: &Notification) {
    println!("{}", note.title.green().bold());
    if let Some(description) = &note.description {
        println!("  {}", description.dimmed());
    }
}

/// Bot messages are indented under a leaf marker
pub fn bot(msg: &str) {
    for (i, line) in msg.lines().enumerate() {
        if i == 0 {
            println!("{} {}", "🌿".green(), line);
        } else {
            println!("   {}", line);
        }
    }
}

pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Human-readable byte count
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
