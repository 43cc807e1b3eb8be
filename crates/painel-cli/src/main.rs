//! Painel CLI - finance dashboard and color tool
//!
//! Usage:
//!   painel login -e EMAIL -p PASS   Log in and remember the user
//!   painel dashboard                Monthly income/expense summary
//!   painel color random             Random color with readable text
//!   painel palette '#FF5733'        Analogic 5-color palette

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref(), cli.session_file)?;
    let store = commands::open_store(&config);

    match cli.command {
        Commands::Login {
            email,
            password,
            legacy,
        } => {
            let api = commands::finance_client(&config)?;
            commands::cmd_login(&api, &store, &email, &password, legacy).await
        }
        Commands::Logout => commands::cmd_logout(&store),
        Commands::Status => commands::cmd_status(&config, &store),
        Commands::Dashboard { json } => {
            let api = commands::finance_client(&config)?;
            commands::cmd_dashboard(&api, &store, json).await
        }
        Commands::Color { action } => match action {
            ColorAction::Random { palette } => {
                let api = commands::color_client(&config)?;
                commands::cmd_color_random(&api, palette).await
            }
            ColorAction::Show { hex } => commands::cmd_color_show(&hex),
        },
        Commands::Palette { hex } => {
            let api = commands::color_client(&config)?;
            commands::cmd_palette(&api, &hex).await
        }
    }
}
