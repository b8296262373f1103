//! Data definitions for character profile files.
//!
//! These structs mirror assets/data/*.ron (or .json) and are used for
//! deserialization only; spawning turns them into components.

use serde::{Deserialize, Serialize};

use crate::animation::AnimatorSettings;
use crate::camera::CameraSettings;
use crate::movement::{FacingMethod, MovementConfig};

pub const PROFILE_SCHEMA_VERSION: u32 = 1;

/// Everything an author configures for one controlled character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterProfile {
    pub schema_version: u32,
    pub movement: MovementConfig,
    pub facing: FacingMethod,
    /// Camera follow; omitted means no camera is moved
    pub camera: Option<CameraSettings>,
    /// Animation parameter names; omitted means nothing is forwarded
    pub animator: Option<AnimatorSettings>,
    /// Read the keyboard directly instead of waiting for control commands
    pub self_driven: bool,
}

impl Default for CharacterProfile {
    fn default() -> Self {
        Self {
            schema_version: PROFILE_SCHEMA_VERSION,
            movement: MovementConfig::default(),
            facing: FacingMethod::default(),
            camera: Some(CameraSettings::default()),
            animator: None,
            self_driven: false,
        }
    }
}
