//! Inserting control points by clicking on the curve.
//!
//! A click close to the rendered curve is snapped onto it. The snapped point then has to be
//! placed somewhere in the control point sequence: it goes right after the start of the control
//! polygon edge it is closest to, which is the part of the polygon shaping that piece of curve.

use crate::periodic::{PeriodicSpline, SampledCurve, MIN_POINTS};
use crate::segment::{closest_point_on_segment, distance_to_segment};
use crate::Point;

/// Number of samples used to hit test the curve.
///
/// Independent of the rendering resolution, hit testing wants a finer polyline.
pub const HIT_TEST_RESOLUTION: usize = 300;

/// Snapped points closer than this to a neighbouring control point are not inserted
pub const MIN_SPACING: f64 = 1e-6;

/// Where and what to insert into the control points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insertion {
    /// Index the new point should end up at
    pub index: usize,

    /// The point on the curve closest to the click
    pub point: Point,
}

/// Finds the segment of `curve` closest to `pos`.
///
/// Returns the segment's index and distance. The closing segment from the last sample back to
/// the first is included. Ties go to the earlier segment.
pub fn nearest_curve_segment(curve: &SampledCurve, pos: &Point) -> Option<(usize, f64)> {
    curve
        .segments()
        .map(|(a, b)| distance_to_segment(pos, a, b))
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((i, distance)),
        })
}

/// Finds the index of the control polygon edge closest to `point`.
///
/// Only the open polygon is scanned i.e. the edge from the last point back to the first is skipped.
pub fn nearest_control_segment(points: &[Point], point: &Point) -> Option<usize> {
    points
        .windows(2)
        .map(|pair| distance_to_segment(point, &pair[0], &pair[1]))
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (j, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((j, distance)),
        })
        .map(|(j, _)| j)
}

/// Decides whether a click at `pos` should insert a new control point on the curve through `points`.
///
/// Returns `None` if there is no curve (fewer than 4 points or a degenerate configuration),
/// if the click is `threshold` or further away from it or if the snapped point would coincide with
/// one of its new neighbours, which would leave a curve that can't be fitted anymore.
/// The caller is expected to fall back to appending in that case.
pub fn find_insertion(points: &[Point], pos: &Point, threshold: f64) -> Option<Insertion> {
    find_insertion_with_resolution(points, pos, threshold, HIT_TEST_RESOLUTION)
}

/// Same as [`find_insertion`] but with a custom hit test resolution
pub fn find_insertion_with_resolution(
    points: &[Point],
    pos: &Point,
    threshold: f64,
    resolution: usize,
) -> Option<Insertion> {
    if points.len() < MIN_POINTS || !pos.x.is_finite() || !pos.y.is_finite() {
        return None;
    }
    let curve = PeriodicSpline::fit(points)
        .and_then(|spline| spline.sample(resolution))
        .ok()?;

    let (segment, distance) = nearest_curve_segment(&curve, pos)?;
    if !(distance < threshold) {
        return None;
    }

    let samples = curve.samples();
    let a = &samples[segment];
    let b = &samples[(segment + 1) % samples.len()];
    let point = closest_point_on_segment(pos, a, b);

    let index = nearest_control_segment(points, &point)? + 1;
    let before = &points[index - 1];
    let after = &points[index % points.len()];
    if (point - before).norm() < MIN_SPACING || (point - after).norm() < MIN_SPACING {
        return None;
    }
    Some(Insertion { index, point })
}
