use crate::error::{Result, StatusError};
use std::path::PathBuf;
use std::time::Duration;

/// Per-command timeout for status subcommands
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-command timeout for manifest generation (interactive shell start-up is slow)
pub const MANIFEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of entries listed in a tooltip section
pub const LIST_LIMIT: usize = 10;

/// Context names longer than this are shortened in the bar text
pub const CONTEXT_MAX_CHARS: usize = 15;

/// Number of characters kept when a context name is shortened
pub const CONTEXT_KEEP_CHARS: usize = 12;

/// Platform-internal namespaces hidden from the per-namespace breakdown
pub const SYSTEM_NAMESPACES: &[&str] = &[
    "default",
    "kube-system",
    "kube-public",
    "kube-node-lease",
    "ingress-nginx",
];

pub fn is_system_namespace(namespace: &str) -> bool {
    SYSTEM_NAMESPACES.contains(&namespace)
}

/// Location of the generated tool manifest: `~/.config/cursor/generated/tools.yaml`
pub fn manifest_path() -> Result<PathBuf> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| StatusError::config("Could not determine home directory"))?;

    Ok(home_dir
        .join(".config")
        .join("cursor")
        .join("generated")
        .join("tools.yaml"))
}
