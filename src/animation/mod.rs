//! Animation domain: forwards movement values to animation parameters.
//!
//! The controller does not play animations. It writes horizontal speed,
//! vertical speed and the grounded flag into an [`AnimatorParameters`] store
//! that a blend tree or sprite state machine can read.

use std::collections::HashMap;

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{CharacterSystems, MovementState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorValue {
    Float(f32),
    Bool(bool),
}

/// Named animation parameters, keyed by parameter name.
#[derive(Component, Debug, Default, Clone)]
pub struct AnimatorParameters {
    values: HashMap<String, AnimatorValue>,
}

impl AnimatorParameters {
    pub fn set_float(&mut self, name: &str, value: f32) {
        self.set(name, AnimatorValue::Float(value));
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.set(name, AnimatorValue::Bool(value));
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.values.get(name) {
            Some(AnimatorValue::Float(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(AnimatorValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn set(&mut self, name: &str, value: AnimatorValue) {
        // Unnamed parameters are not bound
        if name.is_empty() {
            return;
        }
        // Overwrite in place to avoid allocating the key every frame
        match self.values.get_mut(name) {
            Some(existing) => *existing = value,
            None => {
                self.values.insert(name.to_string(), value);
            }
        }
    }
}

/// Binds a character to the animation target it drives.
#[derive(Component, Debug, Clone)]
pub struct AnimatorBinding {
    /// Entity holding the [`AnimatorParameters`]; may be the character itself.
    pub target: Entity,
    pub names: AnimatorSettings,
}

/// Parameter names written each frame. An empty name skips that parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorSettings {
    pub x_speed: String,
    pub y_speed: String,
    pub grounded: String,
}

impl AnimatorSettings {
    pub fn bind(&self, target: Entity) -> AnimatorBinding {
        AnimatorBinding {
            target,
            names: self.clone(),
        }
    }
}

pub struct AnimatorBridgePlugin;

impl Plugin for AnimatorBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            forward_animator_parameters.in_set(CharacterSystems::Present),
        );
    }
}

pub(crate) fn forward_animator_parameters(
    characters: Query<(&AnimatorBinding, &MovementState, &LinearVelocity)>,
    mut targets: Query<&mut AnimatorParameters>,
) {
    for (binding, state, velocity) in &characters {
        let Ok(mut parameters) = targets.get_mut(binding.target) else {
            continue;
        };

        parameters.set_float(&binding.names.x_speed, velocity.x.abs());
        parameters.set_float(&binding.names.y_speed, velocity.y);
        parameters.set_bool(&binding.names.grounded, state.is_grounded());
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::movement::MovementConfig;

    fn names() -> AnimatorSettings {
        AnimatorSettings {
            x_speed: "xSpeed".to_string(),
            y_speed: "ySpeed".to_string(),
            grounded: "grounded".to_string(),
        }
    }

    #[test]
    fn test_parameters_written_to_self() {
        let mut world = World::new();
        let character = world
            .spawn((
                MovementConfig::default(),
                LinearVelocity(Vec2::new(-3.0, 2.5)),
                AnimatorParameters::default(),
            ))
            .id();
        world
            .entity_mut(character)
            .insert(names().bind(character));
        world
            .get_mut::<MovementState>(character)
            .unwrap()
            .update_grounded(true);

        world.run_system_once(forward_animator_parameters).unwrap();

        let parameters = world.get::<AnimatorParameters>(character).unwrap();
        assert_eq!(parameters.float("xSpeed"), Some(3.0));
        assert_eq!(parameters.float("ySpeed"), Some(2.5));
        assert_eq!(parameters.bool("grounded"), Some(true));
    }

    #[test]
    fn test_parameters_written_to_separate_target() {
        let mut world = World::new();
        let target = world.spawn(AnimatorParameters::default()).id();
        world.spawn((
            MovementConfig::default(),
            LinearVelocity(Vec2::new(1.5, -4.0)),
            names().bind(target),
        ));

        world.run_system_once(forward_animator_parameters).unwrap();

        let parameters = world.get::<AnimatorParameters>(target).unwrap();
        assert_eq!(parameters.float("xSpeed"), Some(1.5));
        assert_eq!(parameters.float("ySpeed"), Some(-4.0));
        assert_eq!(parameters.bool("grounded"), Some(false));
    }

    #[test]
    fn test_target_without_parameters_is_a_no_op() {
        let mut world = World::new();
        let target = world.spawn_empty().id();
        world.spawn((
            MovementConfig::default(),
            LinearVelocity(Vec2::new(1.0, 0.0)),
            names().bind(target),
        ));

        world.run_system_once(forward_animator_parameters).unwrap();

        assert!(world.get::<AnimatorParameters>(target).is_none());
    }

    #[test]
    fn test_empty_names_are_skipped() {
        let mut parameters = AnimatorParameters::default();
        parameters.set_float("", 1.0);
        parameters.set_bool("grounded", true);
        parameters.set_bool("grounded", false);

        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters.bool("grounded"), Some(false));
        assert_eq!(parameters.float("grounded"), None);
    }
}
