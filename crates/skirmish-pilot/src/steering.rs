//! Turn-rate limited steering.

use skirmish_core::geometry::{angle_delta, normalize_angle};

/// Turn from `current` toward `desired` by at most `max_step` degrees,
/// taking the short way round. Lands exactly on `desired` once within reach.
pub fn steer_toward(current: f64, desired: f64, max_step: f64) -> f64 {
    let delta = angle_delta(current, desired);
    if delta.abs() <= max_step {
        normalize_angle(desired)
    } else {
        normalize_angle(current + max_step * delta.signum())
    }
}

/// Heading pointing directly away from `bearing`.
pub fn reciprocal(bearing: f64) -> f64 {
    normalize_angle(bearing + 180.0)
}
