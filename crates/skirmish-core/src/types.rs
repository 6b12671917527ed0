//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// World-space position (world units, y grows downwards).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// World-space velocity (world units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames advanced so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Scale each channel by `factor` (clamped to `[0, 1]`), truncating.
    pub fn scaled(self, factor: f64) -> Rgb {
        let f = factor.clamp(0.0, 1.0);
        Rgb(
            (self.0 as f64 * f) as u8,
            (self.1 as f64 * f) as u8,
            (self.2 as f64 * f) as u8,
        )
    }
}

/// One named pixel rectangle inside a sprite sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl FrameRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        (self.right - self.left) as f64
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top) as f64
    }
}

/// Ordered frame-index table for one sprite sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTable {
    pub frames: Vec<FrameRect>,
}

impl FrameTable {
    pub fn new(frames: Vec<FrameRect>) -> Self {
        Self { frames }
    }

    /// A table of `count` identical square frames of side `size`.
    pub fn uniform(count: usize, size: i32) -> Self {
        Self {
            frames: (0..count)
                .map(|i| {
                    let left = i as i32 * size;
                    FrameRect::new(left, 0, left + size, size)
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FrameRect> {
        self.frames.get(index)
    }
}
