use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::runner::{non_empty_lines, CommandRunner};
use crate::error::{Result, StatusError};

/// Installed packages and shell aliases, as written to `tools.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolManifest {
    pub brew_packages: Vec<String>,
    pub aliases: BTreeMap<String, String>,
}

impl ToolManifest {
    /// Gather packages and aliases from the current machine
    pub fn collect(runner: &dyn CommandRunner) -> Self {
        Self {
            brew_packages: list_brew_packages(runner),
            aliases: list_shell_aliases(runner),
        }
    }

    /// Render as YAML, falling back to pretty JSON if YAML serialization fails
    pub fn render(&self) -> Result<String> {
        match serde_yaml::to_string(self) {
            Ok(yaml) => Ok(yaml),
            Err(e) => {
                warn!("YAML serialization failed, writing JSON instead: {}", e);
                serde_json::to_string_pretty(self)
                    .map_err(|e| StatusError::serialization(e.to_string()))
            }
        }
    }

    /// Write the rendered manifest, creating parent directories as needed
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.render()?)?;
        Ok(())
    }
}

/// Installed Homebrew formulae, sorted. Empty when brew is not on `PATH`.
pub fn list_brew_packages(runner: &dyn CommandRunner) -> Vec<String> {
    list_brew_packages_with(runner, |name| which::which(name).is_ok())
}

/// Like [`list_brew_packages`], with the `PATH` lookup supplied by the caller
pub fn list_brew_packages_with(
    runner: &dyn CommandRunner,
    is_installed: impl Fn(&str) -> bool,
) -> Vec<String> {
    if !is_installed("brew") {
        debug!("brew not found on PATH");
        return Vec::new();
    }

    parse_packages(&runner.run("brew", &["list", "--formula"]))
}

/// Aliases defined in an interactive bash session
pub fn list_shell_aliases(runner: &dyn CommandRunner) -> BTreeMap<String, String> {
    parse_aliases(&runner.run("bash", &["-ic", "alias"]))
}

pub fn parse_packages(text: &str) -> Vec<String> {
    let mut packages: Vec<String> = non_empty_lines(text).map(str::to_string).collect();
    packages.sort();
    packages
}

/// Parse `alias name='value'` lines as printed by bash's `alias` builtin
pub fn parse_aliases(text: &str) -> BTreeMap<String, String> {
    text.lines()
        .filter_map(|line| line.strip_prefix("alias "))
        .filter_map(|rest| rest.split_once('='))
        .map(|(name, value)| (name.trim().to_string(), unquote(value.trim()).to_string()))
        .collect()
}

/// Strip one layer of matching single or double quotes; a lone quote becomes empty
fn unquote(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value.get(1..value.len().saturating_sub(1)).unwrap_or("");
        }
    }
    value
}
