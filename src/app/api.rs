//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::app::{AppContext, commands};
use crate::domain::{EditorRegistry, VisibleEditor};
use crate::services::{TerminalHost, load_config};

pub use crate::app::commands::classify::Classification;
pub use crate::app::commands::switch::{SkipReason, SwitchOutcome};
pub use crate::domain::{AppError, SwitchCommand};

/// Inputs for a switch invocation driven from outside the editor.
#[derive(Debug, Clone)]
pub struct SwitchOptions {
    pub command: SwitchCommand,
    /// Active document path, used verbatim.
    pub active: Option<String>,
    /// Visible editors as `PATH=PANE` entries.
    pub visible: Vec<String>,
    /// Explicit configuration file. Defaults to `autonav.toml` in the working directory.
    pub config: Option<PathBuf>,
}

/// Run a switch command from the current directory.
pub fn switch(options: SwitchOptions) -> Result<SwitchOutcome, AppError> {
    switch_at(std::env::current_dir()?, options)
}

/// Run a switch command, looking up `autonav.toml` in `dir`.
///
/// Document paths are not rebased onto `dir`.
pub fn switch_at(dir: impl Into<PathBuf>, options: SwitchOptions) -> Result<SwitchOutcome, AppError> {
    let dir: PathBuf = dir.into();
    let config = load_config(options.config.as_deref(), &dir)?;
    let visible = options
        .visible
        .iter()
        .map(|raw| raw.parse::<VisibleEditor>())
        .collect::<Result<Vec<_>, _>>()?;

    let host = TerminalHost::new(options.active, EditorRegistry::new(visible));
    let ctx = AppContext::new(host, config);

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    runtime.block_on(commands::switch::execute(&ctx, options.command))
}

/// Classify a path using the configuration in the current directory.
pub fn classify(path: &str, config: Option<&Path>) -> Result<Classification, AppError> {
    classify_at(std::env::current_dir()?, path, config)
}

/// Classify a path, looking up `autonav.toml` in `dir`.
pub fn classify_at(
    dir: impl Into<PathBuf>,
    path: &str,
    config: Option<&Path>,
) -> Result<Classification, AppError> {
    let dir: PathBuf = dir.into();
    let config = load_config(config, &dir)?;
    commands::classify::execute(path, &config)
}
