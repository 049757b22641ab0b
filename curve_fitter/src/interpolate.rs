//! Half-sine segment interpolation between 2D points.
//!
//! Each pair of consecutive points is joined by a sine arc spanning exactly
//! half a period, so the curve passes through every input point with zero
//! slope there. The arc's amplitude, vertical offset and angular frequency
//! follow directly from the endpoints; the phase offset is found with a
//! Newton–Raphson iteration.

use std::f64::consts::PI;

use log::debug;
use thiserror::Error;

use crate::geometry::{Point, Polyline};

/// Default number of samples generated per segment.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 250;
/// Default iteration cap for the phase solver.
pub const DEFAULT_MAX_ITERATIONS: usize = 30;
/// Default residual tolerance for the phase solver.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Errors produced when validating interpolation input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InterpolateError {
    /// Fewer than two points were supplied.
    #[error("at least 2 points are required for interpolation, found {found}")]
    InsufficientPoints { found: usize },
    /// Two points share an x coordinate, so no function of x can pass
    /// through both.
    #[error("two points share the x coordinate {x}; x values must be distinct")]
    DuplicateX { x: f64 },
}

impl From<InterpolateError> for std::io::Error {
    fn from(err: InterpolateError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err.to_string())
    }
}

/// Newton–Raphson solver for the phase offset of a half-sine segment.
///
/// The phase `n` is the root of `g(n) = A*sin(pi*n/(x2-x1)) + C - y1`,
/// which places the left endpoint of the arc on the left data point. A
/// vanishing derivative or an exhausted iteration budget ends the search
/// with the current estimate; a poorly placed segment is preferable to
/// aborting the whole curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSolver {
    pub max_iterations: usize,
    pub tolerance: f64,
    pub initial_guess: f64,
}

impl Default for PhaseSolver {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            initial_guess: 0.0,
        }
    }
}

impl PhaseSolver {
    /// Solves for the phase offset of the segment from `start` to `end`.
    ///
    /// Requires `start.x < end.x`; the interpolator validates this before
    /// constructing any segment.
    pub fn solve(&self, start: Point, end: Point) -> f64 {
        let dx = end.x - start.x;
        let amplitude = (end.y - start.y) / 2.0;
        let offset = (start.y + end.y) / 2.0;

        let mut n = self.initial_guess;
        for _ in 0..self.max_iterations {
            let residual = amplitude * (PI * n / dx).sin() + offset - start.y;
            if residual.abs() < self.tolerance {
                return n;
            }
            let derivative = amplitude * (PI * n / dx).cos() * PI / dx;
            if derivative.abs() < f64::EPSILON {
                debug!(
                    "phase solve stalled at n = {} (derivative vanished, residual {})",
                    n, residual
                );
                return n;
            }
            n -= residual / derivative;
        }
        debug!("phase solve hit the iteration cap at n = {}", n);
        n
    }
}

/// One half-period sine arc spanning two consecutive points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineSegment {
    start: Point,
    end: Point,
    amplitude: f64,
    offset: f64,
    omega: f64,
    phase: f64,
}

impl SineSegment {
    /// Builds the arc between `start` and `end`, solving for its phase.
    pub fn new(start: Point, end: Point, solver: &PhaseSolver) -> Self {
        Self {
            start,
            end,
            amplitude: (end.y - start.y) / 2.0,
            offset: (start.y + end.y) / 2.0,
            omega: PI / (end.x - start.x),
            phase: solver.solve(start, end),
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Evaluates the arc at `x`.
    pub fn value(&self, x: f64) -> f64 {
        self.amplitude * (self.omega * (x - self.end.x - self.phase)).sin() + self.offset
    }

    /// Evaluates the slope of the arc at `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        self.amplitude * self.omega * (self.omega * (x - self.end.x - self.phase)).cos()
    }

    /// Samples `count` evenly spaced points on `[start.x, end.x)`.
    ///
    /// The right endpoint is left out: it coincides with the next segment's
    /// first sample, and the caller closes the final segment explicitly.
    pub fn sample(&self, count: usize) -> Vec<Point> {
        let step = (self.end.x - self.start.x) / count as f64;
        (0..count)
            .map(|i| {
                let x = self.start.x + i as f64 * step;
                Point::new(x, self.value(x))
            })
            .collect()
    }
}

/// Interpolator stitching half-sine segments through an ordered point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineInterpolator {
    pub samples_per_segment: usize,
    pub solver: PhaseSolver,
}

impl Default for SineInterpolator {
    fn default() -> Self {
        Self {
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
            solver: PhaseSolver::default(),
        }
    }
}

impl SineInterpolator {
    pub fn new(samples_per_segment: usize) -> Self {
        Self {
            samples_per_segment,
            ..Self::default()
        }
    }

    /// Interpolates a smooth curve through `points`.
    ///
    /// The input is sorted by x internally, so callers need not pre-sort.
    /// Fails before any segment arithmetic when fewer than two points are
    /// given or when two points share an x coordinate. The returned curve
    /// ends exactly on the last input point.
    pub fn interpolate(&self, points: &[Point]) -> Result<Polyline, InterpolateError> {
        if points.len() < 2 {
            return Err(InterpolateError::InsufficientPoints {
                found: points.len(),
            });
        }

        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
        for pair in sorted.windows(2) {
            if pair[0].x == pair[1].x {
                return Err(InterpolateError::DuplicateX { x: pair[0].x });
            }
        }

        let mut vertices =
            Vec::with_capacity((sorted.len() - 1) * self.samples_per_segment + 1);
        for pair in sorted.windows(2) {
            let segment = SineSegment::new(pair[0], pair[1], &self.solver);
            vertices.extend(segment.sample(self.samples_per_segment));
        }
        vertices.push(*sorted.last().expect("validated to hold at least 2 points"));

        Ok(Polyline::new(vertices))
    }
}
