use crate::domain::{AppError, EditorRegistry, OpenRequest};

/// Port for the editor hosting the switch commands.
#[trait_variant::make(HostEditor: Send)]
pub trait LocalHostEditor {
    /// Path of the active document, if any.
    fn active_document(&self) -> Option<String>;

    /// Documents currently visible and their panes.
    fn visible_editors(&self) -> EditorRegistry;

    /// Open or reveal a document. Fails when the document cannot be opened.
    async fn open_document(&self, request: &OpenRequest) -> Result<(), AppError>;

    /// Show a transient informational message.
    fn show_information_message(&self, message: &str);
}
