#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{ARM_COUNT, TIP_HIT_RADIUS_PX};
use crate::geom::{self, Point};
use crate::points::StarPoint;
use crate::stats::StatId;

/// Test which arm tip (if any) is under `pt`.
///
/// Tips get a fixed screen-space slop; when two slop circles overlap the
/// nearest tip wins.
#[must_use]
pub fn hit_tip(pt: Point, points: &[StarPoint; ARM_COUNT]) -> Option<StatId> {
    let max_sq = TIP_HIT_RADIUS_PX * TIP_HIT_RADIUS_PX;
    points
        .iter()
        .map(|p| (p.stat, geom::dist_sq(pt, p.tip)))
        .filter(|&(_, d)| d <= max_sq)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(stat, _)| stat)
}
