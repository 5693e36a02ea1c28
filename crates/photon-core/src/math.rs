//! Small geometric helpers on top of `glam`.
//!
//! All functions are pure; zero-length inputs yield zero vectors rather
//! than NaNs.

use crate::types::Vector2;

/// Distance between two points.
#[inline]
pub fn distance(a: Vector2, b: Vector2) -> f64 {
    a.distance(b)
}

/// Unit vector pointing from `from` toward `to`, or zero if they coincide.
#[inline]
pub fn direction(from: Vector2, to: Vector2) -> Vector2 {
    (to - from).normalize_or_zero()
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Scalar cross product (z of the 3D cross) of two planar vectors.
#[inline]
pub fn cross(a: Vector2, b: Vector2) -> f64 {
    a.perp_dot(b)
}

/// Step from `from` toward `to` by at most `max_step` meters without
/// overshooting. Returns the new point and the distance actually covered.
pub fn step_toward(from: Vector2, to: Vector2, max_step: f64) -> (Vector2, f64) {
    let remaining = distance(from, to);
    let step = max_step.max(0.0).min(remaining);
    (from + direction(from, to) * step, step)
}

/// Linear falloff: 1.0 at zero distance, 0.0 at `radius` and beyond.
#[inline]
pub fn linear_falloff(dist: f64, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    (1.0 - dist / radius).max(0.0)
}
