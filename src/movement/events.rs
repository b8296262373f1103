//! Movement domain: control requests and ground notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Request for one control step on a character.
///
/// Several commands for the same character in one frame accumulate.
#[derive(Debug, Clone, Copy)]
pub struct ControlCommand {
    pub entity: Entity,
    /// Horizontal direction; values outside [-1, 1] are clamped.
    pub direction: i32,
    pub jump: bool,
}

impl Message for ControlCommand {}

/// Message fired when a character touches ground after being airborne
#[derive(Debug)]
pub struct Landed {
    pub entity: Entity,
}

impl Message for Landed {}

/// Message fired when a character loses ground contact
#[derive(Debug)]
pub struct LeftGround {
    pub entity: Entity,
}

impl Message for LeftGround {}

/// Message fired when a control step clamped the character's fall speed
#[derive(Debug)]
pub struct ReachedMaxFallSpeed {
    pub entity: Entity,
}

impl Message for ReachedMaxFallSpeed {}
