// Core collection logic

pub mod cluster;
pub mod config;
pub mod docker;
pub mod manifest;
pub mod runner;

// Re-export commonly used items
pub use cluster::{ClusterReport, ClusterSnapshot, ClusterSummary, PodPhase};
pub use docker::ContainerSummary;
pub use manifest::ToolManifest;
pub use runner::{CommandRunner, SystemRunner};
