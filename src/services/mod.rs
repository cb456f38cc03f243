mod config_filesystem;
mod terminal_host;

pub use config_filesystem::load_config;
pub use terminal_host::TerminalHost;
