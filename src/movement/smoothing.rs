//! Critically damped smoothing toward a moving target.

use bevy::prelude::*;

const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Moves `current` toward `target` like a critically damped spring that
/// settles in roughly `smooth_time` seconds. `velocity` carries the spring
/// state between calls. The result never overshoots `target`.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let decay = spring_decay(omega * dt);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        *velocity = 0.0;
        return target;
    }
    output
}

/// Two-dimensional [`smooth_damp`].
pub fn smooth_damp_vec2(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f32,
    dt: f32,
) -> Vec2 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let decay = spring_decay(omega * dt);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let output = target + (change + temp) * decay;

    if (target - current).dot(output - target) > 0.0 {
        *velocity = Vec2::ZERO;
        return target;
    }
    output
}

// Pade approximation of exp(-x).
fn spring_decay(x: f32) -> f32 {
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let mut value = 3.0;
        let mut velocity = 0.0;
        for _ in 0..120 {
            let next = smooth_damp(value, 0.0, &mut velocity, 0.1, DT);
            assert!(next >= 0.0, "overshot target: {next}");
            assert!(next <= value, "moved away from target");
            value = next;
        }
        assert!(value < 0.01);
    }

    #[test]
    fn test_smooth_damp_zero_dt_is_stationary() {
        let mut velocity = 0.0;
        let value = smooth_damp(2.0, 0.0, &mut velocity, 0.1, 0.0);
        assert_eq!(value, 2.0);
        assert!(velocity.is_finite());
    }

    #[test]
    fn test_smooth_damp_infinite_time_holds_position() {
        let mut velocity = 0.0;
        let value = smooth_damp(2.0, 0.0, &mut velocity, f32::INFINITY, DT);
        assert_eq!(value, 2.0);
        assert_eq!(velocity, 0.0);
    }

    #[test]
    fn test_smooth_damp_vec2_reaches_target() {
        let target = Vec2::new(10.0, -4.0);
        let mut position = Vec2::ZERO;
        let mut velocity = Vec2::ZERO;
        for _ in 0..600 {
            position = smooth_damp_vec2(position, target, &mut velocity, 0.25, DT);
        }
        assert!(position.distance(target) < 0.01);
    }
}
