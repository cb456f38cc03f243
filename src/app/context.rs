use crate::domain::SwitchConfig;
use crate::ports::LocalHostEditor;

/// Application context holding dependencies for command execution.
pub struct AppContext<H: LocalHostEditor> {
    host: H,
    config: SwitchConfig,
}

impl<H: LocalHostEditor> AppContext<H> {
    /// Create a new application context.
    pub fn new(host: H, config: SwitchConfig) -> Self {
        Self { host, config }
    }

    /// Get a reference to the host editor.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Get a reference to the switch configuration.
    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }
}
