use std::path::PathBuf;

use piccolo::config::{GameConfig, PhysicsConfig, CONFIG_ENV_VAR};

#[test]
fn test_defaults_match_the_stock_tuning() {
    let config = GameConfig::default();

    assert_eq!(config.display.caption, "Piccolo");
    assert_eq!((config.display.width, config.display.height), (800, 400));
    assert_eq!(config.display.framerate, 60);
    assert_eq!(config.physics.rest(), 325);
    assert_eq!(config.physics.walk_speed, 5);
    assert_eq!(config.player.start_x, 100);
    assert_eq!(config.assets.root, PathBuf::from("media"));
    assert_eq!(config.audio.volume, 0.1);
}

#[test]
fn test_partial_ron_keeps_other_defaults() {
    let config = GameConfig::from_ron(
        r#"(
            display: (caption: "Hotel"),
            physics: (walk_speed: 7),
            audio: (enabled: false),
        )"#,
    )
    .unwrap();

    assert_eq!(config.display.caption, "Hotel");
    assert_eq!(config.display.width, 800);
    assert_eq!(config.physics.walk_speed, 7);
    assert_eq!(config.physics.jump_step, 10);
    assert!(!config.audio.enabled);
    assert_eq!(config.player, Default::default());
}

#[test]
fn test_invalid_ron_is_an_error() {
    assert!(GameConfig::from_ron("(display: (width: \"wide\"))").is_err());
}

#[test]
fn test_load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("piccolo.ron");
    std::fs::write(&path, "(player: (start_x: 250, placeholder_color: (1, 2, 3)))").unwrap();

    let config = GameConfig::load(&path).unwrap();

    assert_eq!(config.player.start_x, 250);
    assert_eq!(config.player.placeholder_color, (1, 2, 3));
    assert_eq!(config.physics, PhysicsConfig::default());
}

#[test]
fn test_load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(dir.path().join("nope.ron")).unwrap_err();

    assert!(format!("{err:#}").contains("failed to read config"));
}

#[test]
fn test_load_default_honours_env_var() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.ron");
    std::fs::write(&path, "(display: (framerate: 30))").unwrap();

    std::env::set_var(CONFIG_ENV_VAR, &path);
    let loaded = GameConfig::load_default();
    std::env::set_var(CONFIG_ENV_VAR, dir.path().join("absent.ron"));
    let fallback = GameConfig::load_default();
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(loaded.unwrap().display.framerate, 30);
    assert_eq!(fallback.unwrap(), GameConfig::default());
}

#[test]
fn test_engine_config_mirrors_display() {
    let config = GameConfig::from_ron("(display: (caption: \"Lobby\", width: 640, height: 360))").unwrap();
    let engine = config.engine_config();

    assert_eq!(engine.app_name, "Lobby");
    assert_eq!((engine.window_width, engine.window_height), (640, 360));
    assert_eq!(engine.target_fps, 60);
}

fn rejection(text: &str) -> String {
    let err = GameConfig::from_ron(text).unwrap_err();
    format!("{err:#}")
}

#[test]
fn test_defaults_are_valid() {
    assert!(GameConfig::default().validate().is_ok());
}

#[test]
fn test_width_must_exceed_edge_limits() {
    assert!(rejection("(display: (width: 60))").contains("display.width"));
    assert!(rejection("(display: (width: 75))").contains("display.width"));
    assert!(GameConfig::from_ron("(display: (width: 76))").is_ok());
}

#[test]
fn test_jump_step_must_be_positive() {
    assert!(rejection("(physics: (jump_step: 0))").contains("physics.jump_step"));
    assert!(rejection("(physics: (jump_step: -10))").contains("physics.jump_step"));
}

#[test]
fn test_gravity_max_must_be_negative() {
    assert!(rejection("(physics: (gravity_max: 0))").contains("physics.gravity_max"));
}

#[test]
fn test_walk_speed_must_not_be_negative() {
    assert!(rejection("(physics: (walk_speed: -1))").contains("physics.walk_speed"));
    assert!(GameConfig::from_ron("(physics: (walk_speed: 0))").is_ok());
}

#[test]
fn test_framerate_must_be_positive() {
    assert!(rejection("(display: (framerate: 0))").contains("display.framerate"));
}

#[test]
fn test_animation_step_must_not_be_negative() {
    assert!(rejection("(player: (animation_step: -0.5))").contains("player.animation_step"));
}

#[test]
fn test_load_rejects_invalid_values_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("piccolo.ron");
    std::fs::write(&path, "(physics: (jump_step: 0))").unwrap();

    let message = format!("{:#}", GameConfig::load(&path).unwrap_err());

    assert!(message.contains("invalid config"));
    assert!(message.contains("physics.jump_step"));
}
