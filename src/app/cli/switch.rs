use clap::ValueEnum;
use std::path::PathBuf;

use crate::app::api::{self, SwitchOptions};
use crate::domain::{AppError, SwitchCommand};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SwitchTarget {
    /// Switch to the markup template
    Markup,
    /// Switch to the stylesheet
    Style,
    /// Switch to the script
    Script,
}

impl From<SwitchTarget> for SwitchCommand {
    fn from(target: SwitchTarget) -> Self {
        match target {
            SwitchTarget::Markup => SwitchCommand::Markup,
            SwitchTarget::Style => SwitchCommand::Style,
            SwitchTarget::Script => SwitchCommand::Script,
        }
    }
}

/// Skips and open failures are not errors; the host already printed the
/// open request on success.
pub fn run_switch(
    target: SwitchTarget,
    path: Option<String>,
    visible: Vec<String>,
    config: Option<PathBuf>,
) -> Result<(), AppError> {
    let options = SwitchOptions { command: target.into(), active: path, visible, config };
    api::switch(options)?;
    Ok(())
}
