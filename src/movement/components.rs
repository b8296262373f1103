//! Movement domain: components for locomotion, ground contact and facing.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Surface category of a collider, used by the ground probe.
///
/// Colliders without this component are treated as [`Surface::Untagged`].
#[derive(
    Component, Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum Surface {
    #[default]
    Untagged,
    /// Floors and terrain
    Ground,
    /// One-way or floating platforms
    Platform,
    Wall,
    /// Spikes, lava and other damaging surfaces
    Hazard,
}

impl Surface {
    pub const ALL: [Surface; 5] = [
        Surface::Untagged,
        Surface::Ground,
        Surface::Platform,
        Surface::Wall,
        Surface::Hazard,
    ];

    pub const fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// Bitmask of surfaces the character can stand on.
///
/// Serialized as a list of [`Surface`] names.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Surface>", into = "Vec<Surface>")]
pub struct SurfaceSet(u32);

impl SurfaceSet {
    pub const EMPTY: SurfaceSet = SurfaceSet(0);

    pub const fn with(self, surface: Surface) -> Self {
        SurfaceSet(self.0 | surface.bit())
    }

    pub const fn contains(self, surface: Surface) -> bool {
        self.0 & surface.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if any of the overlapped surfaces belongs to this set.
    pub fn touches(self, hits: impl IntoIterator<Item = Surface>) -> bool {
        hits.into_iter().any(|surface| self.contains(surface))
    }

    pub fn surfaces(self) -> impl Iterator<Item = Surface> {
        Surface::ALL
            .into_iter()
            .filter(move |surface| self.contains(*surface))
    }
}

impl Default for SurfaceSet {
    fn default() -> Self {
        SurfaceSet::EMPTY.with(Surface::Untagged)
    }
}

impl FromIterator<Surface> for SurfaceSet {
    fn from_iter<I: IntoIterator<Item = Surface>>(iter: I) -> Self {
        iter.into_iter().fold(SurfaceSet::EMPTY, SurfaceSet::with)
    }
}

impl From<Vec<Surface>> for SurfaceSet {
    fn from(surfaces: Vec<Surface>) -> Self {
        surfaces.into_iter().collect()
    }
}

impl From<SurfaceSet> for Vec<Surface> {
    fn from(set: SurfaceSet) -> Self {
        set.surfaces().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing implied by a clamped direction; neutral input has none.
    pub fn from_direction(direction: i32) -> Option<Facing> {
        match direction.signum() {
            1 => Some(Facing::Right),
            -1 => Some(Facing::Left),
            _ => None,
        }
    }

    pub fn is_flipped(self) -> bool {
        self == Facing::Left
    }
}

/// How the character's visual is mirrored when it turns around.
#[derive(
    Component, Reflect, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub enum FacingMethod {
    /// Leave the visual untouched
    None,
    /// Flip the sign of `Transform::scale.x`
    Scale,
    /// Toggle `Sprite::flip_x`
    #[default]
    SpriteFlip,
}

/// Grounded/jump state machine, derived from [`MovementState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundedPhase {
    Airborne,
    GroundedCanJump,
    GroundedJumped,
}

/// Per-character mutable locomotion state.
///
/// Only the controller systems mutate it; outside code reads it through the
/// accessors.
#[derive(Component, Debug, Default, Clone)]
pub struct MovementState {
    pub(crate) grounded: bool,
    pub(crate) was_grounded: bool,
    pub(crate) already_jumped: bool,
    pub(crate) pending_velocity: Vec2,
    pub(crate) deceleration_velocity: f32,
    pub(crate) camera_velocity: Vec2,
    pub(crate) facing: Option<Facing>,
}

impl MovementState {
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Grounded state as of the previous probe.
    pub fn was_grounded(&self) -> bool {
        self.was_grounded
    }

    pub fn already_jumped(&self) -> bool {
        self.already_jumped
    }

    /// Velocity change waiting for the next physics step.
    pub fn pending_velocity(&self) -> Vec2 {
        self.pending_velocity
    }

    /// Facing from the last nonzero direction, `None` before any input.
    pub fn facing(&self) -> Option<Facing> {
        self.facing
    }

    pub fn phase(&self) -> GroundedPhase {
        match (self.grounded, self.already_jumped) {
            (false, _) => GroundedPhase::Airborne,
            (true, false) => GroundedPhase::GroundedCanJump,
            (true, true) => GroundedPhase::GroundedJumped,
        }
    }
}

/// Flat overlap region under the character used for ground detection.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
pub struct GroundProbe {
    /// Probe center relative to the character. `None` places it at the
    /// bottom edge of the character's box collider.
    pub offset: Option<Vec2>,
    /// Probe width. `None` uses the box collider's width.
    pub width: Option<f32>,
    pub thickness: f32,
}

impl Default for GroundProbe {
    fn default() -> Self {
        Self {
            offset: None,
            width: None,
            thickness: 0.05,
        }
    }
}

/// Raw result of the latest ground probe, before transitions are applied.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GroundContact(pub bool);

/// Marker: the character reads keyboard input itself every frame.
#[derive(Component, Debug, Default)]
pub struct SelfDriven;
