//! Range checks for character profiles, run once at load time.

use super::data::*;

/// A profile field outside its allowed range.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub requirement: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "field '{}' is {} but must be {}",
            self.field, self.value, self.requirement
        )
    }
}

/// Helper macro for checking a field against a predicate
macro_rules! check_field {
    ($errors:expr, $field:expr, $value:expr, $requirement:expr, $valid:expr) => {
        let value: f32 = $value;
        if !value.is_finite() || !$valid(value) {
            $errors.push(ValidationError {
                field: $field,
                value,
                requirement: $requirement,
            });
        }
    };
}

/// Validate all numeric fields of a profile.
/// Returns a list of validation errors, empty if the profile is usable.
pub fn validate_profile(profile: &CharacterProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let movement = &profile.movement;

    check_field!(
        errors,
        "movement.acceleration",
        movement.acceleration,
        ">= 0",
        |v| v >= 0.0
    );
    check_field!(
        errors,
        "movement.deceleration",
        movement.deceleration,
        ">= 0",
        |v| v >= 0.0
    );
    check_field!(
        errors,
        "movement.max_speed",
        movement.max_speed,
        ">= 0",
        |v| v >= 0.0
    );
    check_field!(
        errors,
        "movement.air_drag",
        movement.air_drag,
        "> 0",
        |v| v > 0.0
    );
    check_field!(
        errors,
        "movement.jump_power",
        movement.jump_power,
        ">= 0",
        |v| v >= 0.0
    );
    if let Some(limit) = movement.max_fall_speed {
        check_field!(
            errors,
            "movement.max_fall_speed",
            limit,
            "> 0, or <= 0 for no limit",
            |_| true
        );
    }

    if let Some(camera) = &profile.camera {
        check_field!(
            errors,
            "camera.smoothing",
            camera.smoothing,
            ">= 0",
            |v| v >= 0.0
        );
        for offset in camera.offset {
            check_field!(errors, "camera.offset", offset, "finite", |_| true);
        }
    }

    errors
}
