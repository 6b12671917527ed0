//! Ship handling and kinematic integration.
//!
//! The control functions are called once per input frame (player command or
//! pilot decision); `run` integrates positions with the frame timestep.

use glam::DVec2;
use hecs::World;

use skirmish_core::components::{Helm, Hull, Lifespan, Sprite};
use skirmish_core::constants::SHIP_FRAME_STEP_DEG;
use skirmish_core::geometry::{heading, normalize_angle};
use skirmish_core::types::{Position, Velocity};

pub fn rotate_left(helm: &mut Helm) {
    helm.angle = normalize_angle(helm.angle - helm.rotation_speed);
}

pub fn rotate_right(helm: &mut Helm) {
    helm.angle = normalize_angle(helm.angle + helm.rotation_speed);
}

/// Thrust along the heading, capped at top speed.
pub fn accelerate(helm: &Helm, velocity: &mut Velocity) {
    velocity.0 += heading(helm.angle) * helm.acceleration;
    if velocity.0.length() > helm.top_speed {
        velocity.0 = velocity.0.normalize_or_zero() * helm.top_speed;
    }
}

/// Bleed `friction` of the velocity; snap to rest once slower than `friction`.
pub fn decelerate(helm: &Helm, velocity: &mut Velocity) {
    if velocity.0.length() > 0.0 {
        velocity.0 -= velocity.0 * helm.friction;
        if velocity.0.length() < helm.friction {
            velocity.0 = DVec2::ZERO;
        }
    }
}

/// Orientation frame for a heading.
pub fn frame_for_angle(angle: f64, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    let step = (angle / SHIP_FRAME_STEP_DEG).round() as i64;
    step.rem_euclid(frame_count as i64) as usize
}

/// Collision radius: half the current frame width, scaled.
pub fn collision_radius(sprite: &Sprite, hull: &Hull) -> f64 {
    sprite
        .frames
        .get(sprite.frame_index)
        .map_or(0.0, |frame| frame.width() * hull.size_scale / 2.0)
}

/// Integrate ship positions and pick their orientation frames.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel, helm, sprite, life)) in
        world.query_mut::<(&mut Position, &Velocity, &Helm, &mut Sprite, &Lifespan)>()
    {
        if !life.alive {
            continue;
        }
        pos.0 += vel.0 * dt;
        sprite.frame_index = frame_for_angle(helm.angle, sprite.frames.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helm() -> Helm {
        Helm {
            angle: 0.0,
            top_speed: 5.0,
            acceleration: 0.1,
            rotation_speed: 3.0,
            friction: 0.05,
        }
    }

    #[test]
    fn accelerate_never_exceeds_top_speed() {
        let mut helm = helm();
        let mut vel = Velocity::default();
        for i in 0..500 {
            if i % 7 == 0 {
                rotate_right(&mut helm);
            }
            accelerate(&helm, &mut vel);
            assert!(vel.0.length() <= helm.top_speed + 1e-12);
        }
        assert!((vel.0.length() - helm.top_speed).abs() < 1e-9);
    }

    #[test]
    fn decelerate_converges_to_exact_rest() {
        let helm = helm();
        let mut vel = Velocity(DVec2::new(3.0, -4.0));
        let mut last = vel.0.length();
        for _ in 0..1000 {
            decelerate(&helm, &mut vel);
            let speed = vel.0.length();
            assert!(speed <= last);
            last = speed;
        }
        assert_eq!(vel.0, DVec2::ZERO);
        decelerate(&helm, &mut vel);
        assert_eq!(vel.0, DVec2::ZERO);
    }

    #[test]
    fn rotation_wraps_both_ways() {
        let mut helm = helm();
        rotate_left(&mut helm);
        assert_eq!(helm.angle, 357.0);
        rotate_right(&mut helm);
        rotate_right(&mut helm);
        assert_eq!(helm.angle, 3.0);
    }

    #[test]
    fn accelerate_follows_heading() {
        let mut helm = helm();
        helm.angle = 90.0;
        let mut vel = Velocity::default();
        accelerate(&helm, &mut vel);
        assert!((vel.0 - DVec2::new(0.1, 0.0)).length() < 1e-12);
    }

    #[test]
    fn frames_step_every_fifteen_degrees() {
        assert_eq!(frame_for_angle(0.0, 24), 0);
        assert_eq!(frame_for_angle(7.4, 24), 0);
        assert_eq!(frame_for_angle(7.6, 24), 1);
        assert_eq!(frame_for_angle(355.0, 24), 0);
        assert_eq!(frame_for_angle(90.0, 24), 6);
        assert_eq!(frame_for_angle(90.0, 4), 2);
        assert_eq!(frame_for_angle(90.0, 0), 0);
    }
}
