//! Movement domain: shared resources.

use bevy::prelude::*;

/// Toggles the ground probe overlay drawn by the `dev-tools` feature.
#[derive(Resource, Debug, Clone)]
pub struct ProbeGizmos {
    pub enabled: bool,
}

impl Default for ProbeGizmos {
    fn default() -> Self {
        Self { enabled: true }
    }
}
