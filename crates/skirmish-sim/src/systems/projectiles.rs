//! Projectile flight: expiry, homing guidance, integration and animation.

use glam::DVec2;
use hecs::World;

use skirmish_core::components::{Lifespan, Projectile, ProjectileBody};
use skirmish_core::constants::PROJECTILE_ANIMATION_STEP;
use skirmish_core::geometry::{angle_delta, angle_of, bearing, rotate_deg};
use skirmish_core::types::{Position, Velocity};

use crate::targeting::{nearest_hostile, Contact};

/// Turn a homing missile's velocity toward `target` by at most
/// `max_rotation` degrees, preserving speed. Returns the new facing.
pub fn steer_missile(position: DVec2, velocity: &mut DVec2, target: DVec2, max_rotation: f64) -> f64 {
    let current = angle_of(*velocity);
    let delta = angle_delta(current, bearing(position, target)).clamp(-max_rotation, max_rotation);
    *velocity = rotate_deg(*velocity, delta);
    angle_of(*velocity)
}

fn animate(frame_index: &mut usize, frame_timer: &mut f64, frame_count: usize, dt: f64) {
    *frame_timer += dt;
    if *frame_timer >= PROJECTILE_ANIMATION_STEP {
        *frame_index = (*frame_index + 1) % frame_count.max(1);
        *frame_timer = 0.0;
    }
}

pub fn run(world: &mut World, contacts: &[Contact], dt: f64) {
    for (_entity, (pos, vel, projectile, life)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Projectile, &mut Lifespan)>()
    {
        if !life.alive {
            continue;
        }
        life.elapsed += dt;
        if let Some(lifetime) = life.lifetime {
            if life.rule.is_expired(life.elapsed, lifetime) {
                life.alive = false;
                continue;
            }
        }

        let origin = projectile.origin;
        match &mut projectile.body {
            ProjectileBody::Homing {
                max_rotation,
                frame_count,
                frame_index,
                frame_timer,
            } => {
                if vel.0.length_squared() > 0.0 {
                    if let Some((target, _)) = nearest_hostile(contacts, pos.0, origin) {
                        projectile.angle =
                            steer_missile(pos.0, &mut vel.0, target.position, *max_rotation);
                    }
                }
                animate(frame_index, frame_timer, *frame_count, dt);
            }
            ProjectileBody::Ballistic {
                frame_count,
                frame_index,
                frame_timer,
                static_sprite,
            } => {
                if !*static_sprite {
                    animate(frame_index, frame_timer, *frame_count, dt);
                }
            }
            ProjectileBody::Beam { .. } => {}
        }

        pos.0 += vel.0 * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use skirmish_core::geometry::heading;

    #[test]
    fn small_bearing_change_is_reached_in_one_update() {
        let mut vel = heading(0.0) * 10.0;
        let target = DVec2::new(100.0 * 0.4f64.to_radians().sin(), -100.0 * 0.4f64.to_radians().cos());
        let facing = steer_missile(DVec2::ZERO, &mut vel, target, 0.6);
        assert!((facing - 0.4).abs() < 1e-9);
        assert!((vel.length() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn large_bearing_change_closes_monotonically_without_overshoot() {
        let target = DVec2::new(100.0, 0.0);
        let mut vel = heading(0.0) * 10.0;
        let mut last_error = f64::MAX;
        for _ in 0..200 {
            let facing = steer_missile(DVec2::ZERO, &mut vel, target, 1.5);
            let error = angle_delta(facing, 90.0);
            assert!(error >= -1e-9, "overshot: {error}");
            assert!(error.abs() <= last_error + 1e-12);
            last_error = error.abs();
        }
        assert!(last_error < 1e-9);
    }
}
