//! Interaction overlay: the label payload shown near a hovered arm tip.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use crate::consts::TOOLTIP_OFFSET_PX;
use crate::geom::Point;
use crate::points::StarPoint;
use crate::stats::StatId;

/// A tooltip ready for the renderer: where to anchor it and what it says.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// The stat being labelled.
    pub stat: StatId,
    /// Label anchor on the logical canvas.
    pub anchor: Point,
    /// Label text, `"<StatName>: <value>"`.
    pub text: String,
}

/// Describe the tooltip for one arm point.
///
/// The anchor sits a fixed offset above the tip so the label does not cover
/// the vertex itself.
#[must_use]
pub fn describe(point: &StarPoint) -> Tooltip {
    Tooltip {
        stat: point.stat,
        anchor: Point::new(point.tip.x, point.tip.y - TOOLTIP_OFFSET_PX),
        text: format!("{}: {}", point.stat.display_name(), point.value),
    }
}
