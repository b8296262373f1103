//! Movement domain: ground detection, velocity policy and facing.

mod components;
mod config;
mod events;
mod policy;
mod resources;
pub mod smoothing;
mod systems;


pub use components::{
    Facing, FacingMethod, GroundContact, GroundProbe, GroundedPhase, MovementState, SelfDriven,
    Surface, SurfaceSet,
};
pub use config::MovementConfig;
pub use events::{ControlCommand, Landed, LeftGround, ReachedMaxFallSpeed};
pub use policy::{ControlReport, DECELERATION_DEADZONE, GroundTransition};
pub use resources::ProbeGizmos;

use bevy::prelude::*;

use crate::movement::systems::{
    apply_control_commands, apply_facing, apply_pending_velocity, probe_ground,
    read_self_driven_input, resolve_facing_method, update_grounded,
};

/// Per-frame ordering of the character controller.
///
/// Outside input sources that write [`ControlCommand`]s should run before
/// [`CharacterSystems::Control`].
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterSystems {
    /// Ground probe and landed/left-ground transitions
    Ground,
    /// Input sampling and velocity policy
    Control,
    /// Facing and animation parameters
    Present,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MovementConfig>()
            .register_type::<GroundProbe>()
            .register_type::<FacingMethod>()
            .register_type::<Surface>()
            .init_resource::<ProbeGizmos>()
            .add_message::<ControlCommand>()
            .add_message::<Landed>()
            .add_message::<LeftGround>()
            .add_message::<ReachedMaxFallSpeed>()
            .configure_sets(
                Update,
                (
                    CharacterSystems::Ground,
                    CharacterSystems::Control,
                    CharacterSystems::Present,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, apply_pending_velocity)
            .add_systems(
                Update,
                (resolve_facing_method, probe_ground, update_grounded)
                    .chain()
                    .in_set(CharacterSystems::Ground),
            )
            .add_systems(
                Update,
                (read_self_driven_input, apply_control_commands)
                    .chain()
                    .in_set(CharacterSystems::Control),
            )
            .add_systems(Update, apply_facing.in_set(CharacterSystems::Present));

        #[cfg(feature = "dev-tools")]
        {
            use bevy::gizmos::config::GizmoConfigStore;

            app.add_systems(
                PostUpdate,
                systems::draw_ground_probes.run_if(resource_exists::<GizmoConfigStore>),
            );
        }
    }
}
