//! Configuration system tests
//!
//! Tests for config paths and how the editor config feeds the model.

use std::time::Duration;

use heartpad::config::EditorConfig;
use heartpad::config_paths;
use heartpad::AppModel;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("heartpad"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_storage_and_logs_live_under_config_dir() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(config_paths::storage_file().unwrap().starts_with(&dir));
        assert!(config_paths::logs_dir().unwrap().starts_with(&dir));
    }
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_storage_override_wins() {
    let config = EditorConfig {
        storage_file: Some("/tmp/heartpad-test/store.json".into()),
        ..Default::default()
    };
    assert_eq!(
        config.storage_path().unwrap(),
        std::path::PathBuf::from("/tmp/heartpad-test/store.json")
    );
}

#[test]
fn test_yaml_without_storage_override_omits_it() {
    let yaml = serde_yaml::to_string(&EditorConfig::default()).unwrap();
    assert!(yaml.contains("autosave_interval_secs: 600"));
    assert!(!yaml.contains("storage_file"));
}

#[test]
fn test_model_uses_config_durations() {
    let config = EditorConfig {
        autosave_interval_secs: 5,
        status_duration_ms: 250,
        ..Default::default()
    };
    let model = AppModel::new(config);

    assert_eq!(model.autosave.interval(), Duration::from_secs(5));
    assert_eq!(model.ui.status_duration, Duration::from_millis(250));
}

#[test]
fn test_export_uses_configured_file_name() {
    use heartpad::commands::Cmd;
    use heartpad::messages::{AppMsg, Msg};
    use heartpad::update::update;

    let mut model = AppModel::new(EditorConfig {
        export_file_name: "essay.docx".to_string(),
        ..Default::default()
    });

    match update(&mut model, Msg::App(AppMsg::Export { path: None })) {
        Some(Cmd::Export { path, paragraphs }) => {
            assert_eq!(path, std::path::PathBuf::from("essay.docx"));
            assert_eq!(paragraphs, vec![String::new()]);
        }
        other => panic!("expected export command, got {:?}", other),
    }
}
