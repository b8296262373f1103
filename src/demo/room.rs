//! Demo domain: camera and static level geometry.

use avian2d::prelude::*;
use bevy::prelude::*;
use platformer_controller::movement::Surface;

/// World units per screen pixel; the level is laid out in meters.
const CAMERA_SCALE: f32 = 1.0 / 40.0;

#[derive(Component, Debug)]
pub(crate) struct MainCamera;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 0.0, 100.0),
    ));
}

fn spawn_block(commands: &mut Commands, surface: Surface, color: Color, position: Vec2, size: Vec2) {
    commands.spawn((
        surface,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let hazard_color = Color::srgb(0.7, 0.2, 0.2);

    // Ground
    spawn_block(
        &mut commands,
        Surface::Ground,
        ground_color,
        Vec2::new(0.0, -5.0),
        Vec2::new(40.0, 1.0),
    );

    // Walls: touching them never counts as grounded
    for x in [-20.5, 20.5] {
        spawn_block(
            &mut commands,
            Surface::Wall,
            wall_color,
            Vec2::new(x, 1.0),
            Vec2::new(1.0, 13.0),
        );
    }

    // Platforms, rising left to right
    for (x, y) in [(-10.0, -2.0), (0.0, 0.5), (10.0, 3.0)] {
        spawn_block(
            &mut commands,
            Surface::Platform,
            platform_color,
            Vec2::new(x, y),
            Vec2::new(4.0, 0.5),
        );
    }

    // Hazard strip: solid, but not ground
    spawn_block(
        &mut commands,
        Surface::Hazard,
        hazard_color,
        Vec2::new(15.0, -4.25),
        Vec2::new(3.0, 0.5),
    );
}
