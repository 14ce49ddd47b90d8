//! Notch sizing along a free path.
//!
//! Notches are stepped along a polyline by chord distance, so the path
//! length alone does not tell how big the last notch ends up. The notch
//! size is searched by bisection on the difference between the regular
//! notch size and the size left for the last notch.

use kerfbox_core::Point;
use std::f64::consts::PI;
use tracing::{debug, warn};

/// Evaluations allowed before giving up on an exact fit
pub const MAX_ITERATIONS: usize = 100;
/// Accepted difference between the last notch and the others (mm)
pub const TOLERANCE: f64 = 0.1;

/// Result of a notch size search. Never an error: when the search does not
/// converge the best candidate seen is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotchFitOutcome {
    pub notch_size: f64,
    pub notch_count: usize,
    /// Size left for the last notch with `notch_size`
    pub last_notch_size: f64,
    pub iterations: usize,
    pub converged: bool,
}

impl NotchFitOutcome {
    pub fn error(&self) -> f64 {
        (self.notch_size - self.last_notch_size).abs()
    }
}

/// Find the notch size splitting `total_length` into notches of about
/// `target_size`, so that the last one matches the others.
///
/// `evaluate(size, count)` returns the size left for the last notch when
/// `count - 1` notches of `size` are placed first. It is expected to
/// decrease when `size` grows.
pub fn fit_notch_size<F>(total_length: f64, target_size: f64, mut evaluate: F) -> NotchFitOutcome
where
    F: FnMut(f64, usize) -> f64,
{
    let count = ((total_length / target_size).round() as usize).max(1);
    let initial = total_length / count as f64;
    let mut iterations = 0;
    let mut residual = |size: f64, iterations: &mut usize| {
        *iterations += 1;
        let last = evaluate(size, count);
        (size - last, last)
    };

    let mut best = NotchFitOutcome {
        notch_size: initial,
        notch_count: count,
        last_notch_size: 0.0,
        iterations: 0,
        converged: false,
    };
    let keep_best = |size: f64, last: f64, iterations: usize, best: &mut NotchFitOutcome| {
        if iterations == 1 || (size - last).abs() < best.error() {
            best.notch_size = size;
            best.last_notch_size = last;
        }
        best.iterations = iterations;
        best.converged = best.error() <= TOLERANCE;
    };

    let (r, last) = residual(initial, &mut iterations);
    keep_best(initial, last, iterations, &mut best);
    if best.converged {
        return best;
    }

    // residual is negative while the last notch is too long
    let (mut lo, mut hi) = (initial * 0.5, initial * 1.5);
    let (mut r_lo, last_lo) = residual(lo, &mut iterations);
    keep_best(lo, last_lo, iterations, &mut best);
    let (r_hi, last_hi) = residual(hi, &mut iterations);
    keep_best(hi, last_hi, iterations, &mut best);
    if r < 0.0 {
        lo = initial;
        r_lo = r;
    } else {
        hi = initial;
    }

    if r_lo * r_hi > 0.0 {
        warn!(
            "notch size search has no bracket on {:.3}mm, keeping {:.3} (last notch {:.3})",
            total_length, best.notch_size, best.last_notch_size
        );
        return best;
    }

    while !best.converged && iterations < MAX_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        let (r_mid, last) = residual(mid, &mut iterations);
        keep_best(mid, last, iterations, &mut best);
        if (r_mid < 0.0) == (r_lo < 0.0) {
            lo = mid;
            r_lo = r_mid;
        } else {
            hi = mid;
        }
    }

    if best.converged {
        debug!(
            "notch size {:.3} x {} after {} tries",
            best.notch_size, best.notch_count, best.iterations
        );
    } else {
        warn!(
            "notch size search did not converge, using best result {:.3} with last notch difference {:.3}",
            best.notch_size,
            best.error()
        );
    }
    best
}

/// Open polyline along which a flex band is laid
#[derive(Debug, Clone, PartialEq)]
pub struct FreePath {
    points: Vec<Point>,
    angles: Vec<f64>,
    thickness: f64,
}

/// Notch positions on a free path
#[derive(Debug, Clone, PartialEq)]
pub struct FreePathNotches {
    pub points: Vec<Point>,
    pub fit: NotchFitOutcome,
}

impl FreePath {
    /// Returns `None` with fewer than two points.
    pub fn new(points: Vec<Point>, thickness: f64) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let angles = points
            .windows(2)
            .map(|w| (w[1].y - w[0].y).atan2(w[1].x - w[0].x))
            .collect();
        Some(Self {
            points,
            angles,
            thickness,
        })
    }

    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
    }

    /// Sum of the direction changes along the path
    pub fn total_turn(&self) -> f64 {
        self.angles
            .windows(2)
            .map(|w| wrap_angle(w[1] - w[0]).abs())
            .sum()
    }

    /// Length of the band: the path shortened so that the band follows the
    /// inner side of every turn
    pub fn flex_length(&self) -> f64 {
        self.length() - self.thickness * self.total_turn() / 2.0
    }

    /// Place `count - 1` notches of `size` from the start. Returns the notch
    /// points, the start included, and the distance left to the path end.
    pub fn step_notches(&self, size: f64, count: usize) -> (Vec<Point>, f64) {
        let p = &self.points;
        let mut notches = vec![p[0]];
        let mut index = 1;
        for _ in 1..count {
            let origin = notches[notches.len() - 1];
            let mut current = self.angles[index - 1];
            let mut turn = 0.0;
            while index < p.len() - 1
                && origin.distance_to(&p[index]) < size + turn * self.thickness / 2.0
            {
                turn += wrap_angle(self.angles[index] - current).abs();
                current = self.angles[index];
                index += 1;
            }
            let distance = size + turn * self.thickness / 2.0;
            notches.push(chord_point(origin, p[index - 1], p[index], distance));
        }
        let last = notches[notches.len() - 1].distance_to(&p[p.len() - 1]);
        (notches, last)
    }

    /// Notches of about `target_size` spread along the whole path
    pub fn fit_notches(&self, target_size: f64) -> FreePathNotches {
        let fit = fit_notch_size(self.flex_length(), target_size, |size, count| {
            self.step_notches(size, count).1
        });
        let (points, _) = self.step_notches(fit.notch_size, fit.notch_count);
        FreePathNotches { points, fit }
    }
}

fn wrap_angle(mut angle: f64) -> f64 {
    if angle > PI {
        angle -= 2.0 * PI;
    } else if angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Point of segment `a`-`b` at `distance` from `origin`, the farthest
/// along the segment when the circle crosses it twice
fn chord_point(origin: Point, a: Point, b: Point, distance: f64) -> Point {
    let d = b - a;
    let w = a - origin;
    let qa = d.x * d.x + d.y * d.y;
    if qa < 1e-12 {
        return b;
    }
    let qb = 2.0 * (d.x * w.x + d.y * w.y);
    let qc = w.x * w.x + w.y * w.y - distance * distance;
    let disc = qb * qb - 4.0 * qa * qc;
    let u = if disc < 0.0 {
        1.0
    } else {
        ((-qb + disc.sqrt()) / (2.0 * qa)).clamp(0.0, 1.0)
    };
    Point::new(a.x + u * d.x, a.y + u * d.y)
}
