use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::config::{manifest_path, MANIFEST_TIMEOUT};
use crate::core::{SystemRunner, ToolManifest};

/// Generate the tool manifest from installed packages and shell aliases
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let path = match matches.get_one::<String>("output") {
        Some(path) => PathBuf::from(path),
        None => manifest_path().context("Could not resolve manifest path")?,
    };

    let runner = SystemRunner::new(MANIFEST_TIMEOUT);
    let manifest = ToolManifest::collect(&runner);

    manifest
        .write_to(&path)
        .with_context(|| format!("Failed to write manifest to {:?}", path))?;

    println!("{} {}", "Wrote".green(), path.display().to_string().cyan());
    Ok(())
}
