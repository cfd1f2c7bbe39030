//! Distance and projection of points onto line segments.
//!
//! These are used twice: once against the sampled curve to decide whether a click hit it
//! and once against the control polygon to decide where a new control point belongs.

use nalgebra::{RealField, Vector2};

/// Computes the parameter `t ∈ [0, 1]` of the point on the segment `a`-`b` closest to `p`.
///
/// The unclamped parameter is `(p - a)·(b - a) / |b - a|²` which is then clamped to the segment.
/// A degenerate segment (`a == b`) yields `0`.
pub fn project_onto_segment<T: RealField>(p: &Vector2<T>, a: &Vector2<T>, b: &Vector2<T>) -> T {
    let ab = b - a;
    let length_squared = ab.dot(&ab);
    if length_squared == T::zero() {
        return T::zero();
    }
    let t = (p - a).dot(&ab) / length_squared;
    num::clamp(t, T::zero(), T::one())
}

/// Returns the point on the segment `a`-`b` closest to `p`.
///
/// For a degenerate segment this is `a`.
pub fn closest_point_on_segment<T: RealField>(
    p: &Vector2<T>,
    a: &Vector2<T>,
    b: &Vector2<T>,
) -> Vector2<T> {
    let t = project_onto_segment(p, a, b);
    a + (b - a) * t
}

/// Euclidean distance from `p` to the segment `a`-`b`.
///
/// For a degenerate segment this is simply the distance to `a`.
pub fn distance_to_segment<T: RealField>(p: &Vector2<T>, a: &Vector2<T>, b: &Vector2<T>) -> T {
    (p - closest_point_on_segment(p, a, b)).norm()
}
