//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Painel - personal finance dashboard and color tool
#[derive(Parser)]
#[command(name = "painel")]
#[command(about = "Finance dashboard and color palette tool", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.config/painel/painel.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Session file (overrides config and PAINEL_SESSION_FILE)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in to the finance API and remember the user
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long, env = "PAINEL_PASSWORD", hide_env_values = true)]
        password: String,

        /// Use the legacy GET login endpoint
        ///
        /// WARNING: sends the credentials in the URL query string, where
        /// proxies and server logs can record them.
        #[arg(long)]
        legacy: bool,
    },

    /// Forget the logged-in user
    Logout,

    /// Show session and configured endpoints
    Status,

    /// Show income/expense summary and monthly chart
    Dashboard {
        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate or inspect colors
    Color {
        #[command(subcommand)]
        action: ColorAction,
    },

    /// Generate an analogic 5-color palette
    Palette {
        /// Base color (#RRGGBB or #RGB)
        #[arg(default_value = "#FFFFFF")]
        hex: String,
    },
}

#[derive(Subcommand)]
pub enum ColorAction {
    /// Ask the color API for a random color (local fallback when offline)
    Random {
        /// Also generate the palette for the new color
        #[arg(long)]
        palette: bool,
    },

    /// Show a color with its luminance and readable text color
    Show {
        /// Color (#RRGGBB or #RGB)
        hex: String,
    },
}
