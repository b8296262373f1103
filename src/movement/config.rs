//! Movement domain: per-character tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{FacingMethod, GroundContact, GroundProbe, MovementState, SurfaceSet};

/// Author-time movement tuning for one character.
///
/// Adding this component makes the entity a controlled character; the state
/// and probe components it needs are inserted alongside it.
#[derive(Component, Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[require(MovementState, GroundProbe, GroundContact, FacingMethod)]
#[serde(default)]
pub struct MovementConfig {
    /// Horizontal acceleration (units/second^2)
    pub acceleration: f32,
    /// Inverse time constant of the grounded slow-down
    pub deceleration: f32,
    /// Maximum horizontal speed (units/second)
    pub max_speed: f32,
    /// Divisor applied to horizontal control while airborne
    pub air_drag: f32,
    /// Upward velocity added by a jump
    pub jump_power: f32,
    /// Downward speed cap. `None` or a value <= 0 means no limit.
    pub max_fall_speed: Option<f32>,
    /// Surfaces the character counts as ground
    pub ground: SurfaceSet,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            acceleration: 20.0,
            deceleration: 15.0,
            max_speed: 5.0,
            air_drag: 2.5,
            jump_power: 8.0,
            max_fall_speed: Some(16.0),
            ground: SurfaceSet::default(),
        }
    }
}

impl MovementConfig {
    pub fn fall_speed_limit(&self) -> Option<f32> {
        self.max_fall_speed.filter(|limit| *limit > 0.0)
    }

    pub fn deceleration_time(&self) -> f32 {
        1.0 / self.deceleration
    }
}
