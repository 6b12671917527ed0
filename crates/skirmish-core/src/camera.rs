//! Draw-time view transform. The simulation never reads it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Smallest zoom the camera allows.
pub const MIN_ZOOM: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World point at the center of the viewport.
    pub position: DVec2,
    pub zoom_level: f64,
    pub width: f64,
    pub height: f64,
}

impl Camera {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            position: DVec2::ZERO,
            zoom_level: 1.0,
            width,
            height,
        }
    }

    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        (world - self.position) * self.zoom_level + self.half_extent()
    }

    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        (screen - self.half_extent()) / self.zoom_level + self.position
    }

    pub fn adjust_zoom(&mut self, delta: f64) {
        self.zoom_level = (self.zoom_level + delta).max(MIN_ZOOM);
    }

    fn half_extent(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}
