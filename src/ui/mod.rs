// Presentation module

pub mod formatters;
pub mod status;
pub mod views;

// Re-export commonly used items for cleaner imports
pub use formatters::shorten_context;
pub use status::{Severity, StatusOutput};
pub use views::{cluster_view, combined_view, docker_view};
