//! Movement domain: keyboard sampling for self-driven characters.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{ControlCommand, SelfDriven};

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const JUMP_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp];

/// Raw horizontal axis: -1, 0 or 1. Opposite keys cancel out.
pub(crate) fn keyboard_direction(keyboard: &ButtonInput<KeyCode>) -> i32 {
    let mut x = 0;
    if keyboard.any_pressed(LEFT_KEYS) {
        x -= 1;
    }
    if keyboard.any_pressed(RIGHT_KEYS) {
        x += 1;
    }
    x
}

pub(crate) fn read_self_driven_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    query: Query<Entity, With<SelfDriven>>,
    mut control: MessageWriter<ControlCommand>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    let direction = keyboard_direction(&keyboard);
    // Held, not just pressed: the jump gate stops repeats while grounded
    let jump = keyboard.any_pressed(JUMP_KEYS);

    for entity in &query {
        control.write(ControlCommand {
            entity,
            direction,
            jump,
        });
    }
}
