//! Visible editors and open planning.

use std::str::FromStr;

use super::AppError;
use super::switch::Pane;

/// A document shown in an editor pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleEditor {
    pub path: String,
    pub pane: Pane,
}

impl FromStr for VisibleEditor {
    type Err = AppError;

    /// Parse `PATH=PANE`. The path may itself contain `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidVisibleEditor(s.to_string());
        let (path, pane) = s.rsplit_once('=').ok_or_else(invalid)?;
        if path.is_empty() {
            return Err(invalid());
        }
        let pane = pane.trim().parse::<u8>().ok().and_then(Pane::new).ok_or_else(invalid)?;
        Ok(VisibleEditor { path: path.to_string(), pane })
    }
}

/// Documents currently visible in the host, in host order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorRegistry {
    editors: Vec<VisibleEditor>,
}

impl EditorRegistry {
    pub fn new(editors: Vec<VisibleEditor>) -> Self {
        Self { editors }
    }

    pub fn editors(&self) -> &[VisibleEditor] {
        &self.editors
    }

    /// Pane of the first visible editor showing exactly `path`.
    pub fn pane_of(&self, path: &str) -> Option<Pane> {
        self.editors.iter().find(|editor| editor.path == path).map(|editor| editor.pane)
    }
}

/// Request for the host to show a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub path: String,
    pub pane: Pane,
    /// Whether the document is already visible and only needs focus.
    pub already_visible: bool,
}

/// Reveal `target` where it is already visible, otherwise open it in `pane`.
pub fn plan_open(target: String, pane: Pane, registry: &EditorRegistry) -> OpenRequest {
    match registry.pane_of(&target) {
        Some(existing) => OpenRequest { path: target, pane: existing, already_visible: true },
        None => OpenRequest { path: target, pane, already_visible: false },
    }
}
