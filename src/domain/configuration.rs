//! Switch configuration loaded from `autonav.toml`.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::switch::{Pane, SwitchCommand, SwitchPolicy};

/// Configuration file name searched in the working directory.
pub const CONFIG_FILE: &str = "autonav.toml";

/// User configuration for the switch commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchConfig {
    /// Show an informational message after a successful switch.
    #[serde(default = "default_notify")]
    pub notify: bool,
    #[serde(default = "default_markup")]
    pub markup: TargetConfig,
    #[serde(default = "default_style")]
    pub style: TargetConfig,
    #[serde(default = "default_script")]
    pub script: TargetConfig,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            notify: default_notify(),
            markup: default_markup(),
            style: default_style(),
            script: default_script(),
        }
    }
}

/// Target suffix and pane for one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    pub suffix: String,
    pub pane: u8,
}

impl SwitchConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for command in SwitchCommand::ALL {
            self.target(command).validate(command)?;
        }
        Ok(())
    }

    pub fn target(&self, command: SwitchCommand) -> &TargetConfig {
        match command {
            SwitchCommand::Markup => &self.markup,
            SwitchCommand::Style => &self.style,
            SwitchCommand::Script => &self.script,
        }
    }

    /// Policy for `command`, with suffix and pane taken from this configuration.
    pub fn policy(&self, command: SwitchCommand) -> Result<SwitchPolicy, AppError> {
        let target = self.target(command);
        target.validate(command)?;
        let pane = Pane::new(target.pane)
            .ok_or_else(|| AppError::InvalidPane { command: command.to_string(), pane: target.pane })?;
        Ok(SwitchPolicy { accepted: command.accepted(), suffix: target.suffix.clone(), pane })
    }
}

impl TargetConfig {
    fn validate(&self, command: SwitchCommand) -> Result<(), AppError> {
        let invalid = |reason: &str| AppError::InvalidSuffix {
            command: command.to_string(),
            suffix: self.suffix.clone(),
            reason: reason.to_string(),
        };

        let Some(extension) = self.suffix.strip_prefix('.') else {
            return Err(invalid("must start with '.'"));
        };
        if extension.is_empty() {
            return Err(invalid("must have an extension after '.'"));
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(invalid("must not contain path separators"));
        }
        if Pane::new(self.pane).is_none() {
            return Err(AppError::InvalidPane { command: command.to_string(), pane: self.pane });
        }
        Ok(())
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<SwitchConfig, AppError> {
    let config: SwitchConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn default_notify() -> bool {
    true
}

fn default_target(command: SwitchCommand) -> TargetConfig {
    let policy = command.default_policy();
    TargetConfig { suffix: policy.suffix, pane: policy.pane.get() }
}

fn default_markup() -> TargetConfig {
    default_target(SwitchCommand::Markup)
}

fn default_style() -> TargetConfig {
    default_target(SwitchCommand::Style)
}

fn default_script() -> TargetConfig {
    default_target(SwitchCommand::Script)
}
