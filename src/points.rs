//! Point Calculator: maps the five stat totals to the five arm points.
//!
//! Normalization is dual-mode. While every total is at or below
//! [`SMALL_SCALE_CUTOFF`] the arms scale against the absolute 0–20 range so
//! early progress is visible. Once any total exceeds the cutoff the arms
//! scale relative to the current maximum, with a minimum-visibility floor so
//! a small non-zero stat never renders as an invisible sliver next to a
//! dominant one.

#[cfg(test)]
#[path = "points_test.rs"]
mod points_test;

use crate::consts::{
    ARM_ANGLE_OFFSET, ARM_ANGLE_STEP, ARM_COUNT, MAX_RADIUS, MIN_RADIUS, SMALL_SCALE_CUTOFF,
    VISIBILITY_FLOOR,
};
use crate::geom::{self, Point};
use crate::stats::{StatId, StatValues};

/// One computed arm of the star.
///
/// Created fresh on every computation and never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPoint {
    /// The stat this arm encodes.
    pub stat: StatId,
    /// The stat's raw point total.
    pub value: u32,
    /// Arm angle in radians.
    pub angle: f64,
    /// Tip distance from the center, between `MIN_RADIUS` and `MAX_RADIUS`.
    pub radius: f64,
    /// The value mapped to [0, 1] by the dual-mode scaling rule.
    pub normalized: f64,
    /// The outward vertex of the arm on the logical canvas.
    pub tip: Point,
}

/// Angle of arm `index` in radians. Arm 0 points straight up; arms proceed
/// clockwise at 72° increments.
#[must_use]
pub fn arm_angle(index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let i = index as f64;
    ARM_ANGLE_STEP.mul_add(i, ARM_ANGLE_OFFSET)
}

/// Compute the five arm points for the given stat totals, in fixed stat
/// order.
///
/// All-zero input yields a regular pentagon at `MIN_RADIUS` — the star never
/// collapses to a point at the center.
#[must_use]
pub fn compute_points(stats: &StatValues) -> [StarPoint; ARM_COUNT] {
    // Floor of 1 guarantees a non-zero divisor on the relative scale.
    let max_value = stats.max_value().max(1);

    StatId::ALL.map(|stat| {
        let value = stats.get(stat);
        let normalized = normalize(value, max_value);
        let radius = (MAX_RADIUS - MIN_RADIUS).mul_add(normalized, MIN_RADIUS);
        let angle = arm_angle(stat.index());
        StarPoint {
            stat,
            value,
            angle,
            radius,
            normalized,
            tip: geom::polar(geom::center(), radius, angle),
        }
    })
}

fn normalize(value: u32, max_value: u32) -> f64 {
    if max_value <= SMALL_SCALE_CUTOFF {
        return (f64::from(value) / f64::from(SMALL_SCALE_CUTOFF)).min(1.0);
    }
    let scaled = (f64::from(value) / f64::from(max_value)).min(1.0);
    if value > 0 && scaled < VISIBILITY_FLOOR {
        VISIBILITY_FLOOR
    } else {
        scaled
    }
}
