//! Content domain: tests for profile parsing and validation.

use std::path::Path;

use super::{
    CharacterProfile, ProfileFormat, load_profile, load_profile_or_default, parse_profile,
    validate_profile,
};
use crate::movement::{FacingMethod, Surface};

const FULL_PROFILE: &str = r#"
(
    schema_version: 1,
    movement: (
        acceleration: 30.0,
        deceleration: 10.0,
        max_speed: 6.0,
        air_drag: 2.0,
        jump_power: 9.0,
        max_fall_speed: 20.0,
        ground: [Ground, Platform],
    ),
    facing: Scale,
    camera: (
        offset: (0.0, 1.5),
        smoothing: 6.0,
    ),
    animator: (
        x_speed: "xSpeed",
        y_speed: "ySpeed",
        grounded: "grounded",
    ),
    self_driven: true,
)
"#;

#[test]
fn test_parse_full_ron_profile() {
    let profile = parse_profile(FULL_PROFILE, ProfileFormat::Ron, "full.ron").unwrap();

    assert_eq!(profile.movement.acceleration, 30.0);
    assert_eq!(profile.movement.max_fall_speed, Some(20.0));
    assert!(profile.movement.ground.contains(Surface::Ground));
    assert!(profile.movement.ground.contains(Surface::Platform));
    assert!(!profile.movement.ground.contains(Surface::Untagged));
    assert_eq!(profile.facing, FacingMethod::Scale);
    assert_eq!(profile.camera.as_ref().unwrap().offset, [0.0, 1.5]);
    assert_eq!(profile.animator.as_ref().unwrap().grounded, "grounded");
    assert!(profile.self_driven);
}

#[test]
fn test_missing_fields_use_defaults() {
    let profile = parse_profile("(movement: (max_speed: 7.0))", ProfileFormat::Ron, "partial.ron")
        .unwrap();
    let defaults = CharacterProfile::default();

    assert_eq!(profile.movement.max_speed, 7.0);
    assert_eq!(profile.movement.acceleration, defaults.movement.acceleration);
    assert_eq!(profile.movement.ground, defaults.movement.ground);
    assert_eq!(profile.facing, FacingMethod::SpriteFlip);
    assert!(!profile.self_driven);
}

#[test]
fn test_no_fall_limit_sentinel_is_accepted() {
    let profile = parse_profile(
        "(movement: (max_fall_speed: -1.0))",
        ProfileFormat::Ron,
        "unlimited.ron",
    )
    .unwrap();

    assert_eq!(profile.movement.fall_speed_limit(), None);
}

#[test]
fn test_parse_json_profile() {
    let json = r#"{
        "movement": { "max_speed": 4.0, "ground": ["Untagged", "Ground"] },
        "facing": "None",
        "camera": null
    }"#;
    let profile = parse_profile(json, ProfileFormat::Json, "profile.json").unwrap();

    assert_eq!(profile.movement.max_speed, 4.0);
    assert!(profile.movement.ground.contains(Surface::Ground));
    assert_eq!(profile.facing, FacingMethod::None);
    assert!(profile.camera.is_none());
}

#[test]
fn test_negative_values_rejected() {
    let err = parse_profile(
        "(movement: (max_speed: -5.0, air_drag: 0.0))",
        ProfileFormat::Ron,
        "bad.ron",
    )
    .unwrap_err();

    assert_eq!(err.file, "bad.ron");
    assert!(err.message.contains("movement.max_speed"));
    assert!(err.message.contains("movement.air_drag"));
}

#[test]
fn test_validate_default_profile_is_clean() {
    assert!(validate_profile(&CharacterProfile::default()).is_empty());
}

#[test]
fn test_non_finite_values_rejected() {
    let mut profile = CharacterProfile::default();
    profile.movement.acceleration = f32::NAN;
    profile.movement.max_fall_speed = Some(f32::INFINITY);

    let errors = validate_profile(&profile);
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_unsupported_schema_version() {
    let err = parse_profile("(schema_version: 2)", ProfileFormat::Ron, "future.ron").unwrap_err();
    assert!(err.message.contains("schema_version"));
}

#[test]
fn test_format_from_extension() {
    assert_eq!(
        ProfileFormat::from_path(Path::new("a/profile.json")),
        ProfileFormat::Json
    );
    assert_eq!(
        ProfileFormat::from_path(Path::new("a/profile.ron")),
        ProfileFormat::Ron
    );
    assert_eq!(ProfileFormat::from_path(Path::new("profile")), ProfileFormat::Ron);
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = load_profile(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
    assert!(err.to_string().contains("does/not/exist.ron"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let profile = load_profile_or_default(Path::new("does/not/exist.ron"));
    assert_eq!(profile, CharacterProfile::default());
}

#[test]
fn test_shipped_profile_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/character_profile.ron");
    let profile = load_profile(&path).unwrap();
    assert!(profile.self_driven);
    assert!(profile.animator.is_some());
}
