//! Integration tests for Settings config loading.
//!
//! These tests run without a global config (temp directories only),
//! so they test the local layer on top of compiled defaults.

use std::fs;

use tempfile::TempDir;

use genealogy::config::{local_config_path, RenderStyle, Settings};
use genealogy::domain::Rank;

#[test]
fn given_no_local_config_when_load_then_uses_defaults() {
    // Arrange
    let data_dir = TempDir::new().unwrap();

    // Act
    let settings = Settings::load(Some(data_dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.fallback_rank, Rank::Alumni);
    assert_eq!(settings.render.style, RenderStyle::Rows);
    assert!(settings.render.show_links);
}

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    // Arrange
    let data_dir = TempDir::new().unwrap();
    let local = r#"
fallback_rank = "i1"

[render]
style = "tree"
show_links = false
"#;
    fs::write(local_config_path(data_dir.path()), local).unwrap();

    // Act
    let settings = Settings::load(Some(data_dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.fallback_rank, Rank::I1);
    assert_eq!(settings.render.style, RenderStyle::Tree);
    assert!(!settings.render.show_links);
}

#[test]
fn given_local_config_with_data_dir_when_load_then_data_dir_taken() {
    // Arrange
    let data_dir = TempDir::new().unwrap();
    let target = data_dir.path().join("elsewhere");
    fs::write(
        local_config_path(data_dir.path()),
        format!("data_dir = {:?}\n", target.to_string_lossy()),
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(data_dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.data_dir, target);
}

#[test]
fn given_invalid_local_config_when_load_then_config_error() {
    // Arrange
    let data_dir = TempDir::new().unwrap();
    fs::write(local_config_path(data_dir.path()), "fallback_rank = \"dean\"\n").unwrap();

    // Act
    let result = Settings::load(Some(data_dir.path()));

    // Assert
    let err = result.unwrap_err();
    assert!(err.to_string().contains("config error"), "{err}");
}
