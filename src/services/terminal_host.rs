use tracing::debug;

use crate::domain::{AppError, EditorRegistry, OpenRequest};
use crate::ports::LocalHostEditor;

/// Host adapter for shell-driven editors.
///
/// The active document and visible editors come from the command line. Opening
/// a document checks that it exists and prints `<pane>\t<path>` to stdout for
/// the calling editor to act on.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    active: Option<String>,
    registry: EditorRegistry,
}

impl TerminalHost {
    pub fn new(active: Option<String>, registry: EditorRegistry) -> Self {
        Self { active, registry }
    }
}

impl LocalHostEditor for TerminalHost {
    fn active_document(&self) -> Option<String> {
        self.active.clone()
    }

    fn visible_editors(&self) -> EditorRegistry {
        self.registry.clone()
    }

    async fn open_document(&self, request: &OpenRequest) -> Result<(), AppError> {
        let metadata = tokio::fs::metadata(&request.path).await.map_err(|e| AppError::HostOpen {
            path: request.path.clone(),
            details: e.to_string(),
        })?;

        if !metadata.is_file() {
            return Err(AppError::HostOpen {
                path: request.path.clone(),
                details: "not a regular file".to_string(),
            });
        }

        debug!(path = %request.path, pane = %request.pane, "Emitting open request");
        println!("{}\t{}", request.pane, request.path);
        Ok(())
    }

    fn show_information_message(&self, message: &str) {
        eprintln!("{}", message);
    }
}
