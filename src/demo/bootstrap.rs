//! Demo domain: character bootstrap from the profile file.

use std::path::Path;

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use platformer_controller::animation::AnimatorParameters;
use platformer_controller::content::load_profile_or_default;
use platformer_controller::movement::{
    GroundProbe, Landed, LeftGround, ReachedMaxFallSpeed, SelfDriven,
};

use crate::demo::PROFILE_PATH;
use crate::demo::room::MainCamera;

const CHARACTER_SIZE: Vec2 = Vec2::new(0.8, 1.6);

/// Spawn the demo character from the profile, binding camera and animator.
pub(crate) fn bootstrap_character(
    mut commands: Commands,
    camera: Query<Entity, With<MainCamera>>,
) {
    let profile = load_profile_or_default(Path::new(PROFILE_PATH));

    let character = commands
        .spawn((
            // Controller
            (
                profile.movement.clone(),
                profile.facing,
                GroundProbe::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(CHARACTER_SIZE),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 1.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(CHARACTER_SIZE.x, CHARACTER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
            ),
        ))
        .id();

    if profile.self_driven {
        commands.entity(character).insert(SelfDriven);
    }

    match (&profile.camera, camera.single()) {
        (Some(settings), Ok(camera)) => {
            commands.entity(character).insert(settings.bind(camera));
        }
        (Some(_), Err(e)) => warn!("Camera follow disabled: {}", e),
        (None, _) => {}
    }

    if let Some(names) = &profile.animator {
        commands
            .entity(character)
            .insert((AnimatorParameters::default(), names.bind(character)));
    }

    info!(
        "Spawned character {:?}: self_driven={}, camera={}, animator={}",
        character,
        profile.self_driven,
        profile.camera.is_some(),
        profile.animator.is_some()
    );
}

pub(crate) fn log_ground_events(
    mut landed: MessageReader<Landed>,
    mut left_ground: MessageReader<LeftGround>,
    mut max_fall: MessageReader<ReachedMaxFallSpeed>,
) {
    for event in landed.read() {
        info!("{:?} landed", event.entity);
    }
    for event in left_ground.read() {
        info!("{:?} left the ground", event.entity);
    }
    for event in max_fall.read() {
        debug!("{:?} is falling at max speed", event.entity);
    }
}
