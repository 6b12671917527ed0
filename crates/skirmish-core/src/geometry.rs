//! Planar geometry helpers.
//!
//! Angles are in degrees. 0 points "up" (negative y, screen space) and
//! positive angles turn clockwise, so a heading of 90 points along +x.

use glam::DVec2;

/// Unit vector for a heading angle.
pub fn heading(angle_deg: f64) -> DVec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    DVec2::new(sin, -cos)
}

/// Rotate a vector clockwise (screen space) by `angle_deg`.
pub fn rotate_deg(v: DVec2, angle_deg: f64) -> DVec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    DVec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Heading angle of a direction vector, in `[0, 360)`.
/// A zero vector has no direction and maps to 0.
pub fn angle_of(v: DVec2) -> f64 {
    if v.length_squared() == 0.0 {
        return 0.0;
    }
    normalize_angle(v.y.atan2(v.x).to_degrees() + 90.0)
}

/// Heading angle from one point toward another.
pub fn bearing(from: DVec2, to: DVec2) -> f64 {
    angle_of(to - from)
}

/// Wrap an angle into `[0, 360)`.
pub fn normalize_angle(angle_deg: f64) -> f64 {
    let wrapped = angle_deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in `[-180, 180)`.
pub fn angle_delta(from: f64, to: f64) -> f64 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

/// Closest point to `p` on the segment `a..b`.
pub fn closest_point_on_segment(p: DVec2, a: DVec2, b: DVec2) -> DVec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}
