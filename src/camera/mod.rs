//! Camera domain: smoothed camera following for controlled characters.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementState;
use crate::movement::smoothing::smooth_damp_vec2;

/// Binds a camera entity to follow this character.
#[derive(Component, Reflect, Debug, Clone)]
pub struct CameraFollow {
    pub camera: Entity,
    /// Added to the character position to get the camera target
    pub offset: Vec2,
    /// Higher is snappier; the smooth time is `1 / smoothing`. Zero freezes
    /// the camera.
    pub smoothing: f32,
}

/// Author-time camera settings, bound to a camera entity at spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub offset: [f32; 2],
    pub smoothing: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            offset: [0.0, 0.0],
            smoothing: 4.0,
        }
    }
}

impl CameraSettings {
    pub fn bind(&self, camera: Entity) -> CameraFollow {
        CameraFollow {
            camera,
            offset: Vec2::from_array(self.offset),
            smoothing: self.smoothing,
        }
    }
}

pub struct CameraFollowPlugin;

impl Plugin for CameraFollowPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CameraFollow>().add_systems(
            PostUpdate,
            follow_character.before(TransformSystems::Propagate),
        );
    }
}

/// Late-frame pass: moves bound cameras in the XY plane, keeping their depth.
/// Follows the character's world-space physics [`Position`].
pub(crate) fn follow_character(
    time: Res<Time>,
    mut characters: Query<(&Position, &CameraFollow, &mut MovementState)>,
    mut cameras: Query<&mut Transform, Without<CameraFollow>>,
) {
    let dt = time.delta_secs();

    for (position, follow, mut state) in &mut characters {
        let Ok(mut camera) = cameras.get_mut(follow.camera) else {
            continue;
        };

        let target = position.0 + follow.offset;
        let next = smooth_damp_vec2(
            camera.translation.truncate(),
            target,
            &mut state.camera_velocity,
            1.0 / follow.smoothing,
            dt,
        );
        camera.translation = next.extend(camera.translation.z);
    }
}
