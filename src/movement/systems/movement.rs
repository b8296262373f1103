//! Movement domain: control application, physics-step drain and facing.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    ControlCommand, FacingMethod, MovementConfig, MovementState, ReachedMaxFallSpeed,
};

/// Downgrades sprite flipping to scale flipping on characters without a sprite.
pub(crate) fn resolve_facing_method(
    mut query: Query<(Entity, &mut FacingMethod, Has<Sprite>), Added<FacingMethod>>,
) {
    for (entity, mut method, has_sprite) in &mut query {
        if *method == FacingMethod::SpriteFlip && !has_sprite {
            warn!(
                "Sprite not found on {:?}, switching facing method to Scale",
                entity
            );
            *method = FacingMethod::Scale;
        }
    }
}

pub(crate) fn apply_control_commands(
    time: Res<Time>,
    mut control: MessageReader<ControlCommand>,
    mut query: Query<(&MovementConfig, &mut MovementState, &mut LinearVelocity)>,
    mut max_fall: MessageWriter<ReachedMaxFallSpeed>,
) {
    let dt = time.delta_secs();

    for command in control.read() {
        let Ok((config, mut state, mut velocity)) = query.get_mut(command.entity) else {
            debug!("Ignoring control for {:?}: not a character", command.entity);
            continue;
        };

        let report = state.control(
            &mut velocity.0,
            config,
            command.direction,
            command.jump,
            dt,
        );

        if report.jumped {
            debug!(
                "Jump: entity={:?}, pending={:?}",
                command.entity,
                state.pending_velocity()
            );
        }
        if report.fall_speed_clamped {
            max_fall.write(ReachedMaxFallSpeed {
                entity: command.entity,
            });
        }
    }
}

/// Runs once per physics step: the pending delta is applied and cleared.
pub(crate) fn apply_pending_velocity(
    mut query: Query<(&mut MovementState, &mut LinearVelocity)>,
) {
    for (mut state, mut velocity) in &mut query {
        if state.pending_velocity == Vec2::ZERO {
            continue;
        }
        velocity.0 += state.drain_pending();
    }
}

pub(crate) fn apply_facing(
    mut query: Query<(&MovementState, &FacingMethod, &mut Transform, Option<&mut Sprite>)>,
) {
    for (state, method, mut transform, sprite) in &mut query {
        let Some(facing) = state.facing() else {
            continue;
        };

        match method {
            FacingMethod::None => {}
            FacingMethod::Scale => {
                let magnitude = transform.scale.x.abs();
                let x = if facing.is_flipped() {
                    -magnitude
                } else {
                    magnitude
                };
                if transform.scale.x != x {
                    transform.scale.x = x;
                }
            }
            FacingMethod::SpriteFlip => {
                if let Some(mut sprite) = sprite {
                    if sprite.flip_x != facing.is_flipped() {
                        sprite.flip_x = facing.is_flipped();
                    }
                }
            }
        }
    }
}
