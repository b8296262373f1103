//! Demo domain: a test room with one keyboard-driven character.

mod bootstrap;
mod room;

use bevy::prelude::*;

use crate::demo::bootstrap::{bootstrap_character, log_ground_events};
use crate::demo::room::{setup_camera, spawn_test_room};

pub const PROFILE_PATH: &str = "assets/data/character_profile.ron";

pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (setup_camera, spawn_test_room, bootstrap_character).chain(),
        )
        .add_systems(Update, log_ground_events);
    }
}
