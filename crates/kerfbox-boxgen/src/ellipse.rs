//! Notched elliptic arcs and their flex bands.
//!
//! Used by the coffin lid: the sides carry a notched half ellipse and the
//! top carries the matching flex band. Notch placement needs the inverse
//! of the arc length function, obtained by numeric integration.

use crate::path_builder::PathBuilder;
use kerfbox_core::{MaterialContext, Point};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::debug;

/// Ellipse of semi-axes `a` (x) and `b` (y)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub a: f64,
    pub b: f64,
    thickness: f64,
}

/// Notch layout over one arc of the ellipse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseNotches {
    pub start: f64,
    pub end: f64,
    /// Arc length between `start` and `end`
    pub length: f64,
    /// Gap between two notches, in notch widths
    pub spacing_units: usize,
    pub notch_count: usize,
    pub notch_size: f64,
    /// Arc length between two notches
    pub between: f64,
    /// Number of straight segments approximating the arc between notches
    pub points_between: usize,
    pub step_length: f64,
    /// Integration resolution of the length to angle walk
    pub resolution: usize,
}

impl EllipseNotches {
    /// Arc length consumed by all notches and gaps, the last notch included
    pub fn covered_length(&self) -> f64 {
        self.notch_count as f64 * (self.notch_size + self.between) + self.notch_size
    }
}

impl Ellipse {
    pub fn new(material: &MaterialContext, a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            thickness: material.thickness,
        }
    }

    /// Circumference, Ramanujan's second approximation
    pub fn circumference(&self) -> f64 {
        let (a, b) = (self.a, self.b);
        let h = (a - b) * (a - b) / ((a + b) * (a + b));
        PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }

    /// Point of parameter `angle`, centered on the origin
    pub fn point_at(&self, angle: f64) -> Point {
        Point::new(self.a * angle.cos(), self.b * angle.sin())
    }

    /// Direction of the tangent at `angle`
    pub fn tangent_angle(&self, angle: f64) -> f64 {
        (self.b * angle.cos()).atan2(-self.a * angle.sin())
    }

    pub fn compute_notches(&self, start: f64, end: f64) -> EllipseNotches {
        let length = self.circumference() * (end - start) / (2.0 * PI);
        let spacing_units = if length < 80.0 {
            1
        } else if length < 150.0 {
            2
        } else if length < 250.0 {
            3
        } else {
            4
        };
        let units = spacing_units as f64;
        let notch_count = (length / (2.0 * (units + 1.0) + 2.0)).round_ties_even() as usize;
        let notch_size = length / (notch_count as f64 * (units + 1.0) + 1.0);
        let between = units * notch_size;
        let points_between = (between.round_ties_even() as usize).max(1);
        let step_length = between / points_between as f64;
        let resolution = if length < 500.0 {
            20_000
        } else if length < 2000.0 {
            100_000
        } else {
            500_000
        };
        let notches = EllipseNotches {
            start,
            end,
            length,
            spacing_units,
            notch_count,
            notch_size,
            between,
            points_between,
            step_length,
            resolution,
        };
        debug!(
            "ellipse a={:.3} b={:.3} length={:.3} notches={} size={:.3} between={:.3} points={} resolution={}",
            self.a,
            self.b,
            length,
            notch_count,
            notch_size,
            between,
            points_between,
            resolution
        );
        notches
    }

    /// Draw the notched arc, notches pointing outward. The cursor must be at
    /// the arc start, which lands on `offset`.
    pub fn draw_notched(
        &self,
        path: &mut PathBuilder,
        start: f64,
        end: f64,
        offset: Point,
    ) -> EllipseNotches {
        let plan = self.compute_notches(start, end);
        let t = self.thickness;
        let origin = Point::new(
            -self.a * start.cos() + offset.x,
            -self.b * start.sin() + offset.y,
        );
        let on_arc = |angle: f64| self.point_at(angle) + origin;
        let mut walker = ArcLengthWalker::new(self, &plan);
        let mut angle = start;
        let mut distance = 0.0;

        for _ in 0..plan.notch_count {
            let theta = self.tangent_angle(angle);
            let notch = on_arc(angle).offset_polar(theta - FRAC_PI_2, t);
            path.line_to_point(notch);
            path.line_to_point(notch.offset_polar(theta, plan.notch_size));
            distance += plan.notch_size;
            angle = walker.angle_at(distance);
            path.line_to_point(on_arc(angle));
            for _ in 0..plan.points_between {
                distance += plan.step_length;
                angle = walker.angle_at(distance);
                path.line_to_point(on_arc(angle));
            }
        }

        // The last notch is drawn backward from the end for symmetry
        let theta = self.tangent_angle(end);
        let end_notch = on_arc(end).offset_polar(theta - FRAC_PI_2, t);
        path.line_to_point(end_notch.offset_polar(theta, -plan.notch_size));
        path.line_to_point(end_notch);
        path.line_to_point(on_arc(end));
        plan
    }

    /// Distance from the tangent at each notch to the point one notch period
    /// further. Small values mean the band is almost flat there.
    pub fn flatness(&self, plan: &EllipseNotches) -> Vec<f64> {
        let mut walker = ArcLengthWalker::new(self, plan);
        let period = (plan.spacing_units as f64 + 1.0) * plan.notch_size;
        let mut angle = plan.start;
        let mut distance = 0.0;
        let mut list = Vec::with_capacity(plan.notch_count + 1);
        for _ in 0..plan.notch_count {
            let alpha = self.b * angle.cos();
            let beta = self.a * angle.sin();
            let gamma = -(self.a * self.b);
            distance += period;
            angle = walker.angle_at(distance);
            let p = self.point_at(angle);
            list.push((alpha * p.x + beta * p.y + gamma).abs() / alpha.hypot(beta));
        }
        list.push(list.last().copied().unwrap_or(0.0));
        list
    }

    /// Draw the flex band matching a notched arc, laid flat from `position`.
    ///
    /// Every cut stays under 50mm. When `skip_flex` is set, the cuts between
    /// notches are only drawn where the arc actually bends. The cursor ends
    /// on the bottom edge, at the right end of the band.
    pub fn draw_flex(
        &self,
        path: &mut PathBuilder,
        plan: &EllipseNotches,
        height: f64,
        skip_flex: bool,
        position: Point,
    ) {
        let distances = self.flatness(plan);
        let marks = FlexMarks::new(height, self.thickness);
        let FlexMarks {
            total,
            count,
            long,
            short,
            ..
        } = marks;
        let size = plan.notch_size;
        let units = plan.spacing_units;
        let (mut x, y) = (position.x, position.y);
        debug!(
            "ellipse flex at ({:.3}, {:.3}) height={:.3} marks={} long={:.3} short={:.3}",
            x, y, total, count, long, short
        );

        for distance in distances.iter().take(plan.notch_count) {
            marks.draw_notch(path, x, y, size);
            x += size;
            path.line(x, y + total, x + plan.between, y + total);

            let draw_all = !skip_flex || *distance > 0.5;
            for k in 0..(2 * units - 1) {
                if k != 2 * units - 2 && !draw_all {
                    continue;
                }
                let lx = x + (k + 1) as f64 * size / 2.0;
                if k % 2 == 0 {
                    gen_flex_lines(path, lx, y + total - 1.0, long, count, -1.0);
                } else {
                    gen_flex_lines(path, lx, y + 1.0, short - 1.0, 1, 1.0);
                    gen_flex_lines(path, lx, y + short + 2.0, long, count - 1, 1.0);
                    gen_flex_lines(path, lx, y + total - short, short - 1.0, 1, 1.0);
                }
            }
            path.line(x, y, x + plan.between, y);
            x += plan.between;
        }

        marks.draw_notch(path, x, y, size);
        x += size;
        path.move_to(x, y + total);
    }
}

/// Vertical cut pattern across a band of height `total`, no cut longer than 50mm
#[derive(Debug, Clone, Copy, PartialEq)]
struct FlexMarks {
    thickness: f64,
    height: f64,
    total: f64,
    count: usize,
    long: f64,
    short: f64,
}

impl FlexMarks {
    fn new(height: f64, thickness: f64) -> Self {
        let total = height + 2.0 * thickness;
        let count = ((total / 50.0) as usize + 1).max(2);
        let long = total / count as f64 - 2.0;
        Self {
            thickness,
            height,
            total,
            count,
            long,
            short: long / 2.0,
        }
    }

    /// Both edges of a notch, the notch ends and the cuts inside it
    fn draw_notch(&self, path: &mut PathBuilder, x: f64, y: f64, size: f64) {
        let t = self.thickness;
        let (total, count, long, short) = (self.total, self.count, self.long, self.short);

        gen_flex_lines(path, x, y, short, 1, 1.0);
        gen_flex_lines(path, x, y + short + 2.0, long, count - 1, 1.0);
        gen_flex_lines(path, x, y + total - short, short, 1, 1.0);
        path.line(x, y + self.height + t, x + size, y + self.height + t);

        let xr = x + size;
        gen_flex_lines(path, xr, y + total, short, 1, -1.0);
        gen_flex_lines(path, xr, y + total - short - 2.0, long, count - 1, -1.0);
        gen_flex_lines(path, xr, y + short, short, 1, -1.0);
        path.line(xr, y + t, x, y + t);

        let xm = x + size / 2.0;
        gen_flex_lines(path, xm, y + t + 1.0, long - t, 1, 1.0);
        if count > 2 {
            gen_flex_lines(path, xm, y + 3.0 + long, long, count - 2, 1.0);
        }
        gen_flex_lines(path, xm, y + total - long - 1.0, long - t, 1, 1.0);
    }
}

/// `count` vertical cuts of length `size` separated by 2mm, going down when
/// `direction` is positive
pub(crate) fn gen_flex_lines(
    path: &mut PathBuilder,
    x: f64,
    mut y: f64,
    size: f64,
    count: usize,
    direction: f64,
) {
    for _ in 0..count {
        path.line(x, y, x, y + direction * size);
        y += direction * (size + 2.0);
    }
}

/// Inverse of the arc length function, by forward integration.
///
/// Queries must come with non decreasing lengths; a fresh walker is needed
/// for every pass over the arc.
#[derive(Debug, Clone)]
pub struct ArcLengthWalker<'a> {
    ellipse: &'a Ellipse,
    start: f64,
    step: f64,
    resolution: usize,
    index: usize,
    distance: f64,
}

impl<'a> ArcLengthWalker<'a> {
    pub fn new(ellipse: &'a Ellipse, plan: &EllipseNotches) -> Self {
        Self {
            ellipse,
            start: plan.start,
            step: (plan.end - plan.start) / plan.resolution as f64,
            resolution: plan.resolution,
            index: 0,
            distance: 0.0,
        }
    }

    /// Parameter angle at arc length `length` from the start
    pub fn angle_at(&mut self, length: f64) -> f64 {
        let (a, b) = (self.ellipse.a, self.ellipse.b);
        let mut previous = self.distance;
        let mut current = self.distance;
        let mut index = self.index;
        while current < length && index < self.resolution {
            previous = current;
            let alpha = (index as f64 + 0.5) * self.step + self.start;
            current += self.step * (a * alpha.sin()).hypot(b * alpha.cos());
            index += 1;
        }
        self.distance = current;
        self.index = index;
        if current > previous {
            let delta = (length - previous) / (current - previous) * self.step;
            (index as f64 - 1.0) * self.step + delta + self.start
        } else {
            index as f64 * self.step + self.start
        }
    }
}
