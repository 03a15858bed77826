use super::support::FakeRunner;
use barstat::core::manifest::{self, ToolManifest};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_alias_quotes_stripped() {
    let aliases = manifest::parse_aliases("alias gs='git status'");
    assert_eq!(aliases.get("gs"), Some(&"git status".to_string()));
}

#[test]
fn test_aliases_from_shell() {
    let runner = FakeRunner::new().with(
        "bash -ic alias",
        "alias gs='git status'\nalias ll='ls -alF'\nalias k='kubectl'",
    );

    let aliases = manifest::list_shell_aliases(&runner);
    assert_eq!(aliases.len(), 3);
    assert_eq!(aliases["ll"], "ls -alF");
    assert_eq!(aliases["k"], "kubectl");
}

#[test]
fn test_failed_shell_gives_no_aliases() {
    let aliases = manifest::list_shell_aliases(&FakeRunner::new());
    assert!(aliases.is_empty());
}

#[test]
fn test_write_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir
        .path()
        .join(".config")
        .join("cursor")
        .join("generated")
        .join("tools.yaml");

    let mut manifest = ToolManifest {
        brew_packages: vec!["git".to_string(), "jq".to_string()],
        ..Default::default()
    };
    manifest
        .aliases
        .insert("gs".to_string(), "git status".to_string());

    manifest.write_to(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("brew_packages:"));
    assert!(content.contains("- jq"));
    assert!(content.contains("gs: git status"));

    let parsed: ToolManifest = serde_yaml::from_str(&content).unwrap();
    assert_eq!(parsed, manifest);
}

#[test]
fn test_write_overwrites_previous_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tools.yaml");
    fs::write(&path, "stale").unwrap();

    ToolManifest::default().write_to(&path).unwrap();

    let parsed: ToolManifest = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(parsed.brew_packages.is_empty());
    assert!(parsed.aliases.is_empty());
}
