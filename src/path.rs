//! Path Builder: the closed 10-vertex star outline.
//!
//! Between each pair of adjacent tips sits an inner vertex at the angular
//! midpoint, at a radius proportional to the adjacent arms' mean radius, so
//! the star's waist grows and shrinks with the arms instead of staying fixed.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use std::f64::consts::PI;

use crate::consts::{ARM_COUNT, INNER_RADIUS_FACTOR, MIN_RADIUS};
use crate::geom::{self, Point};
use crate::points::StarPoint;

/// A single vector path command in logical canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    /// Begin a subpath at the point.
    MoveTo(Point),
    /// Straight segment from the current point.
    LineTo(Point),
    /// Close the current subpath.
    Close,
}

/// Angular midpoint of two adjacent arm angles, corrected at the wrap seam.
///
/// When the two angles are more than π apart (once per polygon, between the
/// last arm and the first) the naive average points at the opposite side of
/// the circle; shifting it by π lands it on the shorter arc.
fn midpoint_angle(a: f64, b: f64) -> f64 {
    let mid = (a + b) / 2.0;
    if (b - a).abs() > PI {
        if mid < 0.0 { mid + PI } else { mid - PI }
    } else {
        mid
    }
}

/// Build the closed star outline: move to tip 0, then alternate inner vertex
/// and next tip around the star, then close.
#[must_use]
pub fn build_path(points: &[StarPoint; ARM_COUNT]) -> Vec<PathCmd> {
    let center = geom::center();
    let mut cmds = Vec::with_capacity(2 + points.len() * 2);
    cmds.push(PathCmd::MoveTo(points[0].tip));

    for i in 0..points.len() {
        let current = &points[i];
        let next = &points[(i + 1) % points.len()];

        let avg_radius = (current.radius + next.radius) / 2.0;
        let inner_radius = (MIN_RADIUS * INNER_RADIUS_FACTOR).max(avg_radius * INNER_RADIUS_FACTOR);
        let inner_angle = midpoint_angle(current.angle, next.angle);

        cmds.push(PathCmd::LineTo(geom::polar(center, inner_radius, inner_angle)));
        cmds.push(PathCmd::LineTo(next.tip));
    }

    cmds.push(PathCmd::Close);
    cmds
}

/// Format a command list as SVG path data: `M x y L x y … Z`.
///
/// Coordinates are floating-point pixel values on the 400×400 logical canvas.
#[must_use]
pub fn svg_path_data(cmds: &[PathCmd]) -> String {
    let mut out = String::new();
    for cmd in cmds {
        if !out.is_empty() {
            out.push(' ');
        }
        match *cmd {
            PathCmd::MoveTo(p) => out.push_str(&format!("M {} {}", p.x, p.y)),
            PathCmd::LineTo(p) => out.push_str(&format!("L {} {}", p.x, p.y)),
            PathCmd::Close => out.push('Z'),
        }
    }
    out
}
