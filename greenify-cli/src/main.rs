//! Greenify CLI - the eco site's session, chat and plant tools in a terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{
    award, chat, config, identify, lang, login, logout, logs, navigate, register, serve, status,
    theme,
};

/// Greenify - environmental education, from the terminal
#[derive(Parser)]
#[command(name = "gf", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current user, points and preferences
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log in with an email address
    Login {
        #[arg(long)]
        email: Option<String>,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account through the registration gateway
    Register {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Prompted for (with confirmation) when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Log out and forget the stored user
    Logout,

    /// Open a page (home, welcome, login, register, map, plant, profile,
    /// about, contact, tasks, games, games-questions, games-interactive)
    Navigate {
        page: String,
    },

    /// Credit points for completed tasks
    Award {
        points: u32,
        /// Number of tasks completed
        #[arg(long, default_value = "0")]
        tasks: u32,
    },

    /// Toggle between dark and light theme
    Theme,

    /// Set the site language (az, en, ru)
    Lang {
        language: String,
    },

    /// Ask the plant-care assistant (interactive when no message is given)
    Chat {
        message: Option<String>,
    },

    /// Identify a plant from a photo
    Identify {
        image: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show settings, or change them in settings.json
    Config {
        /// Base URL of the registration gateway
        #[arg(long)]
        gateway_url: Option<String>,
        /// Gateway request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Port for `gf serve`
        #[arg(long)]
        port: Option<u16>,
        /// Users database file for `gf serve`
        #[arg(long)]
        database: Option<String>,
    },

    /// Run the registration gateway server
    Serve {
        /// Port to listen on (default from settings, 5000)
        #[arg(long)]
        port: Option<u16>,
    },

    /// View and manage application logs
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Status { json } => status::run(json),
        Commands::Login { email, password } => login::run(email, password),
        Commands::Register { name, email, password } => register::run(name, email, password),
        Commands::Logout => logout::run(),
        Commands::Navigate { page } => navigate::run(&page),
        Commands::Award { points, tasks } => award::run(points, tasks),
        Commands::Theme => theme::run(),
        Commands::Lang { language } => lang::run(&language),
        Commands::Chat { message } => chat::run(message),
        Commands::Identify { image, json } => identify::run(&image, json),
        Commands::Config {
            gateway_url,
            timeout,
            port,
            database,
        } => config::run(config::ConfigChanges {
            gateway_url,
            timeout_secs: timeout,
            port,
            database,
        }),
        Commands::Serve { port } => serve::run(port),
        Commands::Logs { command } => logs::run(command),
    }
}
