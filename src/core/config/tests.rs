use super::data::{parse_accent, Config};
use super::io::ConfigError;
use crate::visualizer::{GraphShape, Rgba};
use std::time::Duration;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
    assert_eq!(config.assistant_name(), "ChatBot");
    assert_eq!(config.response_delay(), Duration::from_millis(1500));
    assert_eq!(config.pane_height(), 10);
}

#[test]
fn test_load_full_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(
        &temp_dir,
        r##"
theme = "light"
assistant_name = "Pulse"
response_delay_ms = 250
seed = 42

[model]
temperature = 0.3
max_tokens = 2000

[visualizer]
layer_count = 3
nodes_per_layer = 4
accent = "#ff8800"
pane_height = 6
cell_width = 4.0
fps = 30
"##,
    );

    let config = Config::load_from_path(&path).expect("load failed");
    assert_eq!(config.theme.as_deref(), Some("light"));
    assert_eq!(config.assistant_name(), "Pulse");
    assert_eq!(config.response_delay(), Duration::from_millis(250));
    assert_eq!(config.seed, Some(42));

    let params = config.model_parameters();
    assert_eq!(params.temperature, 0.3);
    assert_eq!(params.top_p, 0.9);
    assert_eq!(params.max_tokens, 2000);

    let engine = config.engine_config();
    assert_eq!(
        engine.shape,
        GraphShape {
            layer_count: 3,
            nodes_per_layer: 4
        }
    );
    assert_eq!(engine.accent, Rgba::new(0xff, 0x88, 0x00, 1.0));
    assert_eq!(engine.node_radius, 4.0);

    let cell = config.cell_metrics();
    assert_eq!((cell.width, cell.height), (4.0, 16.0));
    assert_eq!(config.pane_height(), 6);
    assert_eq!(config.visualizer_fps(), 30);
}

#[test]
fn test_parse_error_reports_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&temp_dir, "theme = [unclosed");

    let err = Config::load_from_path(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("Failed to parse config"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_zero_fps_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&temp_dir, "[visualizer]\nfps = 0\n");

    let err = Config::load_from_path(&path).expect_err("should fail");
    match err {
        ConfigError::Invalid { reason, .. } => assert!(reason.contains("fps")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_zero_cell_size_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&temp_dir, "[visualizer]\ncell_height = 0.0\n");

    let err = Config::load_from_path(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(std::error::Error::source(&err).is_none());
}

#[test]
fn test_bad_accent_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&temp_dir, "[visualizer]\naccent = \"not-a-colour\"\n");

    let err = Config::load_from_path(&path).expect_err("should fail");
    assert!(err.to_string().contains("visualizer.accent"));
}

#[test]
fn test_blank_assistant_name_falls_back() {
    let config = Config {
        assistant_name: Some("   ".to_string()),
        ..Default::default()
    };
    assert_eq!(config.assistant_name(), "ChatBot");
}

#[test]
fn test_model_defaults_are_clamped() {
    let mut config = Config::default();
    config.model.temperature = Some(7.0);
    config.model.max_tokens = Some(10);
    let params = config.model_parameters();
    assert_eq!(params.temperature, 1.0);
    assert_eq!(params.max_tokens, 100);
}

#[test]
fn test_fps_is_capped_and_drives_frame_duration() {
    let mut config = Config::default();
    assert_eq!(config.visualizer_fps(), 60);

    config.visualizer.fps = Some(240);
    assert_eq!(config.visualizer_fps(), 60);

    config.visualizer.fps = Some(20);
    assert_eq!(config.frame_duration(), Duration::from_millis(50));
}

#[test]
fn test_parse_accent_accepts_names_and_hex() {
    assert_eq!(parse_accent("#9481ed"), Some(Rgba::new(148, 129, 237, 1.0)));
    assert_eq!(parse_accent("black"), Some(Rgba::new(0, 0, 0, 1.0)));
    assert_eq!(parse_accent("reset"), None);
}

#[test]
fn test_describe_lists_effective_values() {
    let text = Config::default().describe();
    assert!(text.starts_with("Current configuration:"));
    assert!(text.contains("assistant-name: ChatBot"));
    assert!(text.contains("visualizer.layers: 5 x 8 nodes"));
    assert!(text.contains("visualizer.accent: #9481ed"));
    assert!(text.contains("model.max-tokens: 1000"));
}
