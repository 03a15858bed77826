//! Glyphs shown in the status bar text and tooltips.

/// Container runtime marker
pub const DOCKER: &str = "🐳";

/// Cluster marker
pub const KUBERNETES: &str = "☸";

/// Tooltip list bullet
pub const BULLET: &str = "•";
