mod host_editor;

pub use host_editor::{HostEditor, LocalHostEditor};
