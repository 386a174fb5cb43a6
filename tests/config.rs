//! # Config Tests
//!
//! Tests for stage configuration: defaults, global and project layering,
//! validation errors, and the setup/init commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use checkcycle::{
    commands,
    config::{GlobalConfig, StageSource},
    Config, ConfigError, Direction, StageChoice,
};
use common::{file_args, StageConfigBuilder, TestEnv};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

// =============================================================================
// Loading and Layering
// =============================================================================

#[test]
fn test_defaults_without_any_config() {
    let _env = TestEnv::new();
    let config = Config::load().expect("load should succeed");

    assert_eq!(config.stages(), strings(&["[ ]", "[x]"]).as_slice());
    assert_eq!(config.alternate_stages(), strings(&["[/]", "[?]"]).as_slice());
    assert_eq!(config.source_of("stages"), StageSource::Default);
}

#[test]
fn test_global_config_applies() {
    let env = TestEnv::new();
    env.write_global_config(
        &StageConfigBuilder::new()
            .stages(&["( )", "(x)"])
            .build(),
    );

    let config = Config::load().expect("load should succeed");
    assert_eq!(config.stages(), strings(&["( )", "(x)"]).as_slice());
    assert_eq!(config.alternate_stages(), strings(&["[/]", "[?]"]).as_slice());
    assert_eq!(
        config.source_of("stages"),
        StageSource::Global(env.global_config_path())
    );
}

#[test]
fn test_project_overrides_global_per_key() {
    let env = TestEnv::new();
    env.write_global_config(
        &StageConfigBuilder::new()
            .stages(&["( )", "(x)"])
            .alternate_stages(&["(?)"])
            .build(),
    );
    env.write_project_config(
        &StageConfigBuilder::new()
            .stages(&["TODO", "DONE"])
            .build(),
    );

    let config = Config::load().expect("load should succeed");
    assert_eq!(config.stages(), strings(&["TODO", "DONE"]).as_slice());
    assert_eq!(config.alternate_stages(), strings(&["(?)"]).as_slice());
    assert!(matches!(config.source_of("stages"), StageSource::Project(_)));
    assert!(matches!(
        config.source_of("alternate_stages"),
        StageSource::Global(_)
    ));
}

#[test]
fn test_project_config_found_from_subdirectory() {
    let env = TestEnv::new();
    env.write_project_config(&StageConfigBuilder::new().stages(&["A", "B"]).build());
    let nested = env.project_path().join("notes");
    std::fs::create_dir_all(&nested).unwrap();
    std::env::set_current_dir(&nested).unwrap();

    let config = Config::load().expect("load should succeed");
    assert_eq!(config.stages(), strings(&["A", "B"]).as_slice());
}

#[test]
fn test_malformed_global_config_fails() {
    let env = TestEnv::new();
    env.write_global_config("stages = \"[ ]\"\n");

    let err = Config::load().unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse global config"));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_empty_stage_list_is_config_error() {
    let env = TestEnv::new();
    env.write_global_config(&StageConfigBuilder::new().stages(&[]).build());
    let path = env.write_note("todo.md", "- [ ] milk\n");

    let err = commands::cycle(&file_args(&path, 1, Direction::Forward)).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::EmptyStages {
            key: "stages".to_string()
        })
    );
    assert_eq!(env.read_note(&path), "- [ ] milk\n");
}

#[test]
fn test_empty_marker_is_config_error() {
    let env = TestEnv::new();
    env.write_project_config(
        &StageConfigBuilder::new()
            .alternate_stages(&["[/]", ""])
            .build(),
    );

    let config = Config::load().expect("load should succeed");
    let err = config.cycler(StageChoice::Stages).unwrap_err();
    assert_eq!(
        err,
        ConfigError::EmptyMarker {
            key: "alternate_stages".to_string(),
            index: 1
        }
    );
    assert_eq!(err.to_string(), "'alternate_stages' entry 1 is an empty string");
}

#[test]
fn test_single_stage_list_is_valid() {
    let env = TestEnv::new();
    env.write_global_config(&StageConfigBuilder::new().stages(&["[x]"]).build());
    let path = env.write_note("todo.md", "- [x] milk [/]\n");

    commands::cycle(&file_args(&path, 1, Direction::Forward)).expect("next should succeed");
    assert_eq!(env.read_note(&path), "- [x] milk [x]\n");
}

// =============================================================================
// Setup and Init
// =============================================================================

#[test]
fn test_setup_creates_commented_config() {
    let env = TestEnv::new();

    let validation = commands::setup().expect("setup should succeed");
    assert!(!validation.has_changes());

    let content = env.read_global_config();
    assert!(content.contains("# checkcycle Global Configuration"));
    assert!(content.contains(r#"stages = ["[ ]", "[x]"]"#));
    assert!(content.contains(r#"alternate_stages = ["[/]", "[?]"]"#));

    let parsed: GlobalConfig = toml::from_str(&content).expect("config should parse");
    assert_eq!(parsed, GlobalConfig::default());
}

#[test]
fn test_setup_repairs_existing_config() {
    let env = TestEnv::new();
    env.write_global_config(
        &StageConfigBuilder::new()
            .stages(&["( )", "(x)"])
            .alternate_stages(&["(?)"])
            .raw("colour = true")
            .build(),
    );

    let validation = commands::setup().expect("setup should succeed");
    assert!(validation.missing.is_empty());
    assert_eq!(validation.invalid, vec!["colour".to_string()]);

    let parsed: GlobalConfig =
        toml::from_str(&env.read_global_config()).expect("config should parse");
    assert_eq!(parsed.stages, strings(&["( )", "(x)"]));
    assert_eq!(parsed.alternate_stages, strings(&["(?)"]));
    assert!(!env.read_global_config().contains("colour"));
}

#[test]
fn test_setup_treats_abbreviated_key_as_unknown() {
    let env = TestEnv::new();
    env.write_global_config(
        &StageConfigBuilder::new()
            .stages(&["[ ]", "[x]"])
            .raw(r#"alt_stages = ["(?)"]"#)
            .build(),
    );

    let validation = commands::setup().expect("setup should succeed");
    assert_eq!(validation.invalid, vec!["alt_stages".to_string()]);
    assert_eq!(validation.missing, vec!["alternate_stages".to_string()]);

    let content = env.read_global_config();
    assert!(!content.contains("alt_stages"));
    let parsed: GlobalConfig = toml::from_str(&content).expect("config should parse");
    assert_eq!(parsed.alternate_stages, strings(&["[/]", "[?]"]));
}

#[test]
fn test_setup_reports_missing_keys() {
    let env = TestEnv::new();
    env.write_global_config(&StageConfigBuilder::new().stages(&["[ ]", "[x]"]).build());

    let validation = commands::setup().expect("setup should succeed");
    assert_eq!(validation.missing, vec!["alternate_stages".to_string()]);
    assert!(env.read_global_config().contains("alternate_stages"));
}

#[test]
fn test_init_writes_effective_stages() {
    let env = TestEnv::new();
    env.write_global_config(&StageConfigBuilder::new().stages(&["( )", "(x)"]).build());

    commands::init().expect("init should succeed");

    let config = Config::load().expect("load should succeed");
    assert!(matches!(config.source_of("stages"), StageSource::Project(_)));
    assert_eq!(config.stages(), strings(&["( )", "(x)"]).as_slice());
    assert_eq!(config.alternate_stages(), strings(&["[/]", "[?]"]).as_slice());
    assert!(env.project_config_path().exists());
}

#[test]
fn test_init_twice_fails() {
    let _env = TestEnv::new();
    commands::init().expect("first init should succeed");

    let err = commands::init().unwrap_err();
    assert!(err.to_string().contains("already initialized"));
}
