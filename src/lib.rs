// barstat Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, StatusError};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use crate::core::runner::{CommandRunner, SystemRunner};
pub use ui::StatusOutput;

// Initialize logging. Logs go to stderr; stdout is reserved for the status line.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
