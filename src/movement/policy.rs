//! Movement domain: ground transitions and the per-call velocity policy.

use bevy::prelude::*;

use crate::movement::smoothing::smooth_damp;
use crate::movement::{Facing, MovementConfig, MovementState};

/// Horizontal speed below which grounded deceleration stops smoothing.
pub const DECELERATION_DEADZONE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    Landed,
    LeftGround,
}

/// What a single control call did besides accumulating velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlReport {
    pub jumped: bool,
    pub speed_clamped: bool,
    pub fall_speed_clamped: bool,
}

impl MovementState {
    /// Applies a fresh probe result. Leaving the ground re-arms the jump.
    pub fn update_grounded(&mut self, grounded: bool) -> Option<GroundTransition> {
        self.was_grounded = self.grounded;
        self.grounded = grounded;

        if !grounded {
            self.already_jumped = false;
        }

        match (self.was_grounded, grounded) {
            (false, true) => Some(GroundTransition::Landed),
            (true, false) => Some(GroundTransition::LeftGround),
            _ => None,
        }
    }

    /// One control step: `direction` is clamped to [-1, 1].
    ///
    /// Speed and fall clamps overwrite `velocity` directly; everything else is
    /// added to the pending delta, which accumulates until the next physics
    /// step drains it.
    pub fn control(
        &mut self,
        velocity: &mut Vec2,
        config: &MovementConfig,
        direction: i32,
        jump: bool,
        dt: f32,
    ) -> ControlReport {
        let direction = direction.clamp(-1, 1);
        let mut report = ControlReport::default();

        if let Some(facing) = Facing::from_direction(direction) {
            self.facing = Some(facing);
        }

        let mut delta = Vec2::ZERO;

        if velocity.x > config.max_speed {
            velocity.x = config.max_speed;
            report.speed_clamped = true;
        } else if velocity.x < -config.max_speed {
            velocity.x = -config.max_speed;
            report.speed_clamped = true;
        } else if direction == 0 && self.grounded && velocity.x.abs() > DECELERATION_DEADZONE {
            velocity.x = smooth_damp(
                velocity.x,
                0.0,
                &mut self.deceleration_velocity,
                config.deceleration_time(),
                dt,
            );
        } else {
            delta.x += config.acceleration * direction as f32 * dt;
        }

        if !self.grounded && config.air_drag > 0.0 {
            delta.x /= config.air_drag;
        }

        if jump && self.grounded && !self.already_jumped {
            delta.y += config.jump_power;
            self.already_jumped = true;
            report.jumped = true;
        }

        if let Some(limit) = config
            .fall_speed_limit()
            .filter(|limit| velocity.y < -limit)
        {
            velocity.y = -limit;
            report.fall_speed_clamped = true;
        }

        self.pending_velocity += delta;
        report
    }

    /// Takes the pending delta, leaving zero behind.
    pub fn drain_pending(&mut self) -> Vec2 {
        std::mem::take(&mut self.pending_velocity)
    }
}
