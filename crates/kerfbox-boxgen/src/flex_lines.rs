//! Living hinge cuts bending a flex band around a rounded corner.

use crate::path_builder::PathBuilder;
use kerfbox_core::MaterialContext;
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

/// Layout of the parallel cuts covering one rounded corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexLines {
    /// Cut segments per line
    pub segments: usize,
    /// Number of lines, always odd
    pub line_count: usize,
    pub spacing: f64,
    /// Segment length of even lines (half segments at both ends)
    pub even_segment: f64,
    /// Segment length of odd lines
    pub odd_segment: f64,
    thickness: f64,
    height: f64,
}

impl FlexLines {
    /// Cuts for a corner of `radius` on a band of `height`
    pub fn new(material: &MaterialContext, height: f64, radius: f64) -> Self {
        let t = material.thickness;
        let total = height + 2.0 * t;
        let segments = if total < 30.0 {
            1
        } else if total < 80.0 {
            2
        } else if total < 150.0 {
            3
        } else {
            (total / 50.0).floor() as usize
        };
        let round_distance = radius * FRAC_PI_2;
        let spacing = (round_distance / 14.0).clamp(1.0, 1.5);
        let line_count = (((round_distance / spacing).round_ties_even() as usize) | 1).max(3);
        let spacing = round_distance / (line_count - 1) as f64;
        let n = segments as f64;
        Self {
            segments,
            line_count,
            spacing,
            even_segment: (total - 2.0 * n) / n,
            odd_segment: (total - 2.0 * (n + 1.0)) / n,
            thickness: t,
            height,
        }
    }

    /// Draw the cuts starting at abscissa `position`
    pub fn draw(&self, path: &mut PathBuilder, position: f64) {
        let t = self.thickness;
        let h = self.height;
        let c1 = self.even_segment;
        let c2 = self.odd_segment;
        debug!(
            "flex lines at {:.3}: lines={} spacing={:.3} segments={}",
            position, self.line_count, self.spacing, self.segments
        );
        for i in 0..self.line_count {
            let x = position + i as f64 * self.spacing;
            if i % 2 == 1 {
                for j in 0..self.segments {
                    path.move_to(x, h + t - 2.0 - j as f64 * (c2 + 2.0));
                    path.line_v_rel(-c2);
                }
            } else {
                path.move_to(x, -t);
                path.line_v_rel(c1 / 2.0);
                for j in 0..self.segments.saturating_sub(1) {
                    path.move_to(x, j as f64 * (c1 + 2.0) + c1 / 2.0 + 2.0 - t);
                    path.line_v_rel(c1);
                }
                path.move_to(x, h + t - c1 / 2.0);
                path.line_to(x, h + t);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kerfbox_core::{BoundingBox, Point};

    #[test]
    fn test_line_count_is_odd() {
        let m = MaterialContext::new(3.0, 0.1);
        for radius in [1.0, 5.0, 10.0, 13.0, 40.0] {
            let lines = FlexLines::new(&m, 40.0, radius);
            assert_eq!(lines.line_count % 2, 1, "radius {}", radius);
            let width = lines.spacing * (lines.line_count - 1) as f64;
            assert!((width - radius * FRAC_PI_2).abs() < 1e-9);
        }
    }

    #[test]
    fn test_segment_buckets() {
        let m = MaterialContext::new(3.0, 0.1);
        assert_eq!(FlexLines::new(&m, 20.0, 10.0).segments, 1);
        assert_eq!(FlexLines::new(&m, 40.0, 10.0).segments, 2);
        assert_eq!(FlexLines::new(&m, 100.0, 10.0).segments, 3);
        assert_eq!(FlexLines::new(&m, 194.0, 10.0).segments, 4);
    }

    #[test]
    fn test_cuts_span_band_height() {
        let m = MaterialContext::new(3.0, 0.1);
        let lines = FlexLines::new(&m, 40.0, 10.0);
        let mut path = PathBuilder::new(Point::ORIGIN, None);
        lines.draw(&mut path, 5.0);
        let bbox = path.bounding_box();
        let expected = BoundingBox::new(0.0, -3.0, 5.0 + 10.0 * FRAC_PI_2, 43.0);
        assert_eq!(bbox.min_x, expected.min_x);
        assert!((bbox.min_y - expected.min_y).abs() < 1e-9);
        assert!((bbox.max_x - expected.max_x).abs() < 1e-9);
        assert!((bbox.max_y - expected.max_y).abs() < 1e-9);
    }
}
