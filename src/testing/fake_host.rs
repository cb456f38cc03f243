use std::cell::RefCell;

use crate::domain::{AppError, EditorRegistry, OpenRequest, Pane, VisibleEditor};
use crate::ports::LocalHostEditor;

/// In-memory host editor recording every request.
#[derive(Default)]
pub struct FakeHost {
    pub active: Option<String>,
    pub visible: Vec<VisibleEditor>,
    pub existing_files: Vec<String>,
    pub opened: RefCell<Vec<OpenRequest>>,
    pub messages: RefCell<Vec<String>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(mut self, path: &str) -> Self {
        self.active = Some(path.to_string());
        self
    }

    pub fn with_visible(mut self, path: &str, pane: u8) -> Self {
        let pane = Pane::new(pane).expect("valid pane");
        self.visible.push(VisibleEditor { path: path.to_string(), pane });
        self
    }

    pub fn with_file(mut self, path: &str) -> Self {
        self.existing_files.push(path.to_string());
        self
    }

    pub fn opened(&self) -> Vec<OpenRequest> {
        self.opened.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl LocalHostEditor for FakeHost {
    fn active_document(&self) -> Option<String> {
        self.active.clone()
    }

    fn visible_editors(&self) -> EditorRegistry {
        EditorRegistry::new(self.visible.clone())
    }

    async fn open_document(&self, request: &OpenRequest) -> Result<(), AppError> {
        if !self.existing_files.contains(&request.path) {
            return Err(AppError::HostOpen {
                path: request.path.clone(),
                details: "file not found".to_string(),
            });
        }
        self.opened.borrow_mut().push(request.clone());
        Ok(())
    }

    fn show_information_message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
