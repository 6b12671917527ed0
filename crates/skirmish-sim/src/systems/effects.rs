//! Explosion animation and particle drift.

use hecs::World;

use skirmish_core::components::{Explosion, Lifespan, Particle};
use skirmish_core::types::{Position, Velocity};

/// Advance `life` and report whether it is still alive.
fn age(life: &mut Lifespan, dt: f64) -> bool {
    if !life.alive {
        return false;
    }
    life.elapsed += dt;
    if let Some(lifetime) = life.lifetime {
        if life.rule.is_expired(life.elapsed, lifetime) {
            life.alive = false;
        }
    }
    life.alive
}

pub fn run(world: &mut World, dt: f64) {
    for (_entity, (explosion, life)) in world.query_mut::<(&mut Explosion, &mut Lifespan)>() {
        if !age(life, dt) {
            continue;
        }
        let frame = (life.elapsed / explosion.frame_duration) as usize;
        if frame != explosion.current_frame && frame < explosion.frame_count {
            explosion.current_frame = frame;
        }
    }

    for (_entity, (pos, vel, _particle, life)) in
        world.query_mut::<(&mut Position, &Velocity, &Particle, &mut Lifespan)>()
    {
        if age(life, dt) {
            pos.0 += vel.0 * dt;
        }
    }
}

/// Remaining brightness of a particle, 1 at birth falling to 0.
pub fn fade_factor(life: &Lifespan) -> f64 {
    match life.lifetime {
        Some(lifetime) if lifetime > 0.0 => (1.0 - life.elapsed / lifetime).clamp(0.0, 1.0),
        _ => 1.0,
    }
}
