//! Closed interpolating cubic splines.
//!
//! A [`PeriodicSpline`] passes exactly through every control point and wraps around from the
//! last point back to the first, with continuous position, tangent and curvature across the
//! seam. It is parametrised by normalized cumulative chord length, so one full loop spans `[0, 1]`.
//!
//! Fitting solves the cyclic tridiagonal system for the second derivatives at each control point:
//!
//! $h_{i-1} M_{i-1} + 2(h_{i-1} + h_i) M_i + h_i M_{i+1} = 6 \left(\frac{P_{i+1} - P_i}{h_i} - \frac{P_i - P_{i-1}}{h_{i-1}}\right)$
//!
//! where all indices wrap around. Each segment is then a cubic determined by its two end points
//! and their second derivatives.

use crate::Point;
use nalgebra::{DMatrix, Matrix2xX};
use thiserror::Error;

/// Number of samples used when rendering a curve
pub const DEFAULT_RESOLUTION: usize = 100;

/// Minimum number of control points a closed curve can be fitted through
pub const MIN_POINTS: usize = 4;

/// Reasons why no curve could be fitted
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FitError {
    /// Not enough control points to form a closed curve
    #[error("a closed curve needs at least 4 points, got {0}")]
    TooFewPoints(usize),

    /// The points don't define a curve, e.g. two neighbours coincide
    #[error("degenerate control points: {0}")]
    Degenerate(&'static str),
}

/// A closed cubic spline interpolating a sequence of points.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodicSpline {
    /// The control points as columns
    points: Matrix2xX<f64>,

    /// Second derivatives at each control point as columns
    second_derivatives: Matrix2xX<f64>,

    /// Parameter of each control point, starting at 0. The loop closes at 1.
    knots: Vec<f64>,
}

impl PeriodicSpline {
    /// Fits a closed spline through `points`.
    ///
    /// The curve passes through the points in order and returns from the last to the first.
    pub fn fit(points: &[Point]) -> Result<Self, FitError> {
        let n = points.len();
        if n < MIN_POINTS {
            return Err(FitError::TooFewPoints(n));
        }
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(FitError::Degenerate("non finite coordinate"));
        }

        // Chord lengths including the closing one from the last to the first point
        let chords: Vec<f64> = (0..n)
            .map(|i| (points[(i + 1) % n] - points[i]).norm())
            .collect();
        if chords.iter().any(|&h| h == 0.0) {
            return Err(FitError::Degenerate("coincident neighbouring points"));
        }
        let period: f64 = chords.iter().sum();
        let h: Vec<f64> = chords.iter().map(|c| c / period).collect();

        let mut knots = Vec::with_capacity(n);
        let mut u = 0.0;
        for step in &h {
            knots.push(u);
            u += step;
        }

        let mut matrix = DMatrix::<f64>::zeros(n, n);
        let mut rhs = DMatrix::<f64>::zeros(n, 2);
        for i in 0..n {
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            matrix[(i, prev)] += h[prev];
            matrix[(i, i)] += 2.0 * (h[prev] + h[i]);
            matrix[(i, next)] += h[i];

            let slope = (points[next] - points[i]) / h[i] - (points[i] - points[prev]) / h[prev];
            rhs[(i, 0)] = 6.0 * slope.x;
            rhs[(i, 1)] = 6.0 * slope.y;
        }

        let solution = matrix
            .lu()
            .solve(&rhs)
            .ok_or(FitError::Degenerate("singular system"))?;
        if solution.iter().any(|m| !m.is_finite()) {
            return Err(FitError::Degenerate("numerically unstable system"));
        }

        Ok(PeriodicSpline {
            points: Matrix2xX::from_columns(points),
            second_derivatives: solution.transpose().fixed_rows::<2>(0).into_owned(),
            knots,
        })
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Parameters at which the curve passes through each control point
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Get the point on the curve at parameter `t`.
    ///
    /// `t` is taken modulo 1, so `evaluate(0.0)` and `evaluate(1.0)` are both the first control point.
    /// A non finite `t` yields a point with NaN coordinates.
    pub fn evaluate(&self, t: f64) -> Point {
        if !t.is_finite() {
            return Point::new(f64::NAN, f64::NAN);
        }
        let t = t.rem_euclid(1.0);
        let n = self.len();

        // Index of the last knot at or before t
        let i = match self.knots.binary_search_by(|k| k.total_cmp(&t)) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let next = (i + 1) % n;
        let end = if next == 0 { 1.0 } else { self.knots[next] };
        let h = end - self.knots[i];

        let a = end - t;
        let b = t - self.knots[i];
        let p0 = self.points.column(i);
        let p1 = self.points.column(next);
        let m0 = self.second_derivatives.column(i);
        let m1 = self.second_derivatives.column(next);

        m0 * (a * a * a / (6.0 * h))
            + m1 * (b * b * b / (6.0 * h))
            + (p0 / h - m0 * (h / 6.0)) * a
            + (p1 / h - m1 * (h / 6.0)) * b
    }

    /// Evaluates the curve at `resolution` evenly spaced parameters from 0 to 1 inclusive.
    ///
    /// Since the curve is closed the first and last sample are the same point.
    pub fn sample(&self, resolution: usize) -> Result<SampledCurve, FitError> {
        if resolution < 2 {
            return Err(FitError::Degenerate("resolution below 2"));
        }
        let step = 1.0 / (resolution - 1) as f64;
        let samples = (0..resolution)
            .map(|k| self.evaluate(k as f64 * step))
            .collect();
        Ok(SampledCurve { samples })
    }
}

/// A closed spline approximated by a polyline
#[derive(Clone, Debug, PartialEq)]
pub struct SampledCurve {
    samples: Vec<Point>,
}

impl SampledCurve {
    /// The samples in parameter order
    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Iterates over consecutive sample pairs, including the closing pair from the last sample
    /// back to the first.
    pub fn segments(&self) -> impl Iterator<Item = (&Point, &Point)> {
        let n = self.samples.len();
        (0..n).map(move |i| (&self.samples[i], &self.samples[(i + 1) % n]))
    }
}

/// Fits a closed spline through `points` and samples it at `resolution` parameters.
pub fn fit(points: &[Point], resolution: usize) -> Result<SampledCurve, FitError> {
    PeriodicSpline::fit(points)?.sample(resolution)
}
