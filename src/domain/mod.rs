pub mod category;
pub mod configuration;
pub mod error;
pub mod registry;
pub mod sibling;
pub mod switch;

pub use category::{Category, CategorySet};
pub use configuration::{CONFIG_FILE, SwitchConfig, TargetConfig, parse_config_content};
pub use error::AppError;
pub use registry::{EditorRegistry, OpenRequest, VisibleEditor, plan_open};
pub use sibling::{base_name, classify, resolve_sibling};
pub use switch::{Pane, SwitchCommand, SwitchPolicy};
