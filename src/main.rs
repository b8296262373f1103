mod demo;

use avian2d::prelude::*;
use bevy::prelude::*;
use platformer_controller::CharacterControllerPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer Controller".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * 20.0))
        .add_plugins((CharacterControllerPlugin, demo::DemoPlugin))
        .run();
}
