//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are free functions over `&mut World` (or `&World` when read-only).
//! Entities marked dead stay in the world until cleanup at frame end.

pub mod beams;
pub mod cleanup;
pub mod collision;
pub mod destruction;
pub mod effects;
pub mod hits;
pub mod kinematics;
pub mod pilot;
pub mod projectiles;
pub mod snapshot;
pub mod weapons;
