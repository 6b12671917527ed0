//! Ship-ship collision: positional correction plus a restitution impulse.

use glam::DVec2;
use hecs::{Entity, World};

use skirmish_core::components::{Hull, Lifespan, Sprite};
use skirmish_core::constants::{SHIP_COLLISION_DAMPING, SHIP_RESTITUTION};
use skirmish_core::types::{Position, Velocity};

use super::kinematics::collision_radius;

/// The part of a ship collision resolution reads and writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub mass: f64,
}

/// Broad check: centers closer than the sum of radii.
pub fn overlapping(a: &Body, b: &Body) -> bool {
    a.position.distance(b.position) < a.radius + b.radius
}

/// Separate two overlapping bodies and bounce them if they are closing.
///
/// Coincident centers use the +x axis as the normal. A pair with no
/// inverse mass is left untouched.
pub fn resolve(a: &mut Body, b: &mut Body) {
    let inv_a = 1.0 / a.mass;
    let inv_b = 1.0 / b.mass;
    let inv_total = inv_a + inv_b;
    if !(inv_total.is_finite() && inv_total > 0.0) {
        return;
    }

    let (normal, distance) = contact_normal(a.position, b.position);
    let overlap = a.radius + b.radius - distance;
    if overlap > 0.0 {
        let correction = normal * (overlap / inv_total);
        a.position -= correction * inv_a;
        b.position += correction * inv_b;
    }

    let (normal, _) = contact_normal(a.position, b.position);
    let approach = (b.velocity - a.velocity).dot(normal);
    if approach > 0.0 {
        return;
    }

    let impulse = -(1.0 + SHIP_RESTITUTION) * approach / inv_total;
    a.velocity -= normal * (impulse * inv_a);
    b.velocity += normal * (impulse * inv_b);
    a.velocity *= SHIP_COLLISION_DAMPING;
    b.velocity *= SHIP_COLLISION_DAMPING;
}

fn contact_normal(from: DVec2, to: DVec2) -> (DVec2, f64) {
    let delta = to - from;
    let distance = delta.length();
    if distance == 0.0 {
        (DVec2::X, 0.0)
    } else {
        (delta / distance, distance)
    }
}

/// Resolve every overlapping pair of live ships, in roster order (i < j).
/// Later pairs see the corrections of earlier ones.
pub fn run(world: &mut World, roster: &[Entity]) {
    let mut bodies: Vec<(Entity, Body)> = Vec::with_capacity(roster.len());
    for &entity in roster {
        let Ok(mut query) = world.query_one::<(&Position, &Velocity, &Hull, &Sprite, &Lifespan)>(entity)
        else {
            continue;
        };
        let Some((pos, vel, hull, sprite, life)) = query.get() else {
            continue;
        };
        if !life.alive {
            continue;
        }
        bodies.push((
            entity,
            Body {
                position: pos.0,
                velocity: vel.0,
                radius: collision_radius(sprite, hull),
                mass: hull.mass,
            },
        ));
    }

    let mut touched = vec![false; bodies.len()];
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i].1;
            let b = &mut tail[0].1;
            if overlapping(a, b) {
                resolve(a, b);
                touched[i] = true;
                touched[j] = true;
            }
        }
    }

    for ((entity, body), touched) in bodies.into_iter().zip(touched) {
        if !touched {
            continue;
        }
        if let Ok((pos, vel)) = world.query_one_mut::<(&mut Position, &mut Velocity)>(entity) {
            pos.0 = body.position;
            vel.0 = body.velocity;
        }
    }
}
