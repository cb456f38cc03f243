//! Switch commands and their policies.

use std::fmt;

use super::category::{Category, CategorySet};
use super::sibling::resolve_sibling;

/// Editor column, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pane(u8);

impl Pane {
    pub const MAX: u8 = 9;

    pub fn new(column: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&column).then_some(Pane(column))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-invoked switch command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchCommand {
    Markup,
    Style,
    Script,
}

impl SwitchCommand {
    pub const ALL: [SwitchCommand; 3] =
        [SwitchCommand::Markup, SwitchCommand::Style, SwitchCommand::Script];

    pub fn as_str(self) -> &'static str {
        match self {
            SwitchCommand::Markup => "markup",
            SwitchCommand::Style => "style",
            SwitchCommand::Script => "script",
        }
    }

    /// Categories a path must match for this command to act on it.
    pub fn accepted(self) -> CategorySet {
        match self {
            SwitchCommand::Markup => {
                CategorySet::of(&[Category::Script, Category::Style, Category::Test])
            }
            SwitchCommand::Style => {
                CategorySet::of(&[Category::Script, Category::Markup, Category::Test])
            }
            SwitchCommand::Script => {
                CategorySet::of(&[Category::Markup, Category::Test, Category::Style])
            }
        }
    }

    pub fn default_policy(self) -> SwitchPolicy {
        let (suffix, column) = match self {
            SwitchCommand::Markup => (".wxml", 1),
            SwitchCommand::Style => (".less", 2),
            SwitchCommand::Script => (".js", 3),
        };
        SwitchPolicy { accepted: self.accepted(), suffix: suffix.to_string(), pane: Pane(column) }
    }
}

impl fmt::Display for SwitchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted categories, target suffix and target pane for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchPolicy {
    pub accepted: CategorySet,
    pub suffix: String,
    pub pane: Pane,
}

impl SwitchPolicy {
    pub fn resolve(&self, path: &str) -> Option<String> {
        resolve_sibling(path, self.accepted, &self.suffix)
    }
}
