//! CLI Adapter.

mod classify;
mod switch;

use crate::app::logging;
use crate::domain::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autonav")]
#[command(version)]
#[command(
    about = "Switch between sibling script, style, and markup files",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the sibling of PATH and emit an open request
    #[clap(visible_alias = "s")]
    Switch {
        /// Target kind to switch to
        #[arg(value_enum)]
        target: switch::SwitchTarget,
        /// Path of the active document
        path: Option<String>,
        /// Visible editor as PATH=PANE (repeatable)
        #[arg(short = 'v', long = "visible", value_name = "PATH=PANE")]
        visible: Vec<String>,
        /// Configuration file (defaults to ./autonav.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show how PATH is classified and where each switch leads
    #[clap(visible_alias = "c")]
    Classify {
        /// Path to classify
        path: String,
        /// Configuration file (defaults to ./autonav.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Switch { target, path, visible, config } => {
            switch::run_switch(target, path, visible, config)
        }
        Commands::Classify { path, config } => classify::run_classify(&path, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
