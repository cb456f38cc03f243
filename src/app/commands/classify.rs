//! Report how a path is classified and where each switch would lead.

use crate::domain::{AppError, Category, CategorySet, SwitchCommand, SwitchConfig, base_name, classify};

/// Classification of one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub path: String,
    pub categories: CategorySet,
    pub primary: Option<Category>,
    pub base_name: Option<String>,
    /// Sibling each switch command would resolve to.
    pub siblings: Vec<(SwitchCommand, Option<String>)>,
}

pub fn execute(path: &str, config: &SwitchConfig) -> Result<Classification, AppError> {
    let categories = classify(path);
    let mut siblings = Vec::with_capacity(SwitchCommand::ALL.len());
    for command in SwitchCommand::ALL {
        siblings.push((command, config.policy(command)?.resolve(path)));
    }

    Ok(Classification {
        path: path.to_string(),
        categories,
        primary: categories.primary(),
        base_name: base_name(path).map(str::to_string),
        siblings,
    })
}
