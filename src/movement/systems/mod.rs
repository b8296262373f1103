//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

#[cfg(feature = "dev-tools")]
pub(crate) use collisions::draw_ground_probes;
pub(crate) use collisions::{probe_ground, update_grounded};
pub(crate) use input::read_self_driven_input;
pub(crate) use movement::{
    apply_control_commands, apply_facing, apply_pending_velocity, resolve_facing_method,
};
