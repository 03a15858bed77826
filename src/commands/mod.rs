// Command handlers module
pub mod status;
pub mod tools;
pub mod version;

// Re-exports for cleaner imports
pub use status::StatusView;
pub use tools::execute as tools;
pub use version::execute as version;
