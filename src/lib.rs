//! Platformer character controller for Bevy and Avian2D.
//!
//! Add [`CharacterControllerPlugin`] next to Avian's `PhysicsPlugins`, then
//! spawn a dynamic rigid body with a box collider and a [`MovementConfig`].
//! Drive it by writing [`ControlCommand`] messages, or add [`SelfDriven`] to
//! let it read the keyboard.
//!
//! [`MovementConfig`]: movement::MovementConfig
//! [`ControlCommand`]: movement::ControlCommand
//! [`SelfDriven`]: movement::SelfDriven

pub mod animation;
pub mod camera;
pub mod content;
pub mod movement;

use bevy::prelude::*;

use crate::animation::AnimatorBridgePlugin;
use crate::camera::CameraFollowPlugin;
use crate::movement::MovementPlugin;

pub struct CharacterControllerPlugin;

impl Plugin for CharacterControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((MovementPlugin, CameraFollowPlugin, AnimatorBridgePlugin));
    }
}

pub mod prelude {
    pub use crate::CharacterControllerPlugin;
    pub use crate::animation::{AnimatorBinding, AnimatorParameters, AnimatorSettings};
    pub use crate::camera::{CameraFollow, CameraSettings};
    pub use crate::content::{CharacterProfile, load_profile, load_profile_or_default};
    pub use crate::movement::{
        CharacterSystems, ControlCommand, Facing, FacingMethod, GroundProbe, Landed, LeftGround,
        MovementConfig, MovementState, ReachedMaxFallSpeed, SelfDriven, Surface, SurfaceSet,
    };
}
