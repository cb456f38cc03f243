//! autonav: switch between sibling script, style, and markup files.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    Classification, SkipReason, SwitchOptions, SwitchOutcome, classify, classify_at, switch,
    switch_at,
};
pub use domain::{
    AppError, Category, CategorySet, Pane, SwitchCommand, SwitchConfig, base_name, resolve_sibling,
};
pub use ports::{HostEditor, LocalHostEditor};
