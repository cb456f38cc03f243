use std::io;

use thiserror::Error;

/// Library-wide error type for autonav operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Target suffix is not a usable file extension.
    #[error("Invalid suffix '{suffix}' for {command}: {reason}")]
    InvalidSuffix { command: String, suffix: String, reason: String },

    /// Pane number is outside the editor's column range.
    #[error("Invalid pane {pane} for {command}: must be between 1 and 9")]
    InvalidPane { command: String, pane: u8 },

    /// Visible editor argument could not be parsed.
    #[error("Invalid visible editor '{0}': expected PATH=PANE")]
    InvalidVisibleEditor(String),

    /// Host editor failed to open a document.
    #[error("Failed to open '{path}': {details}")]
    HostOpen { path: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind` view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidSuffix { .. }
            | AppError::InvalidPane { .. }
            | AppError::InvalidVisibleEditor(_) => io::ErrorKind::InvalidInput,
            AppError::HostOpen { .. } => io::ErrorKind::NotFound,
        }
    }
}
