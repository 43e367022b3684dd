//! Layer Composer: the three scaled, gold-toned copies of the star outline.
//!
//! Layers are rendering-order-significant: outer drawn first, inner last, so
//! inner layers sit on top and the stack reads as a bevel.

#[cfg(test)]
#[path = "layers_test.rs"]
mod layers_test;

use crate::consts::ARM_COUNT;
use crate::geom;
use crate::path::{self, PathCmd};
use crate::points::StarPoint;

/// Fill of the outer layer; stroke of the middle layer.
pub const WARM_GOLD: &str = "#DAA520";

/// Stroke of the outer layer.
pub const DARK_GOLD: &str = "#B8860B";

/// Fill of the middle layer; stroke of the inner layer and glow color.
pub const BRIGHT_GOLD: &str = "#FFD700";

/// Fill of the inner layer.
pub const PALE_YELLOW: &str = "#FFFACD";

/// `(scale, fill, stroke, opacity, glow)` per layer, outer to inner.
const LAYER_TABLE: [(f64, &str, &str, f64, bool); 3] = [
    (1.0, WARM_GOLD, DARK_GOLD, 0.90, false),
    (0.9, BRIGHT_GOLD, WARM_GOLD, 0.95, false),
    (0.8, PALE_YELLOW, BRIGHT_GOLD, 1.0, true),
];

/// One rendered copy of the star outline.
#[derive(Debug, Clone, PartialEq)]
pub struct StarLayer {
    /// The closed outline, rebuilt from this layer's scaled tips.
    pub path: Vec<PathCmd>,
    /// Fill color as a CSS color string.
    pub fill: &'static str,
    /// Stroke color as a CSS color string.
    pub stroke: &'static str,
    /// Layer opacity in [0, 1].
    pub opacity: f64,
    /// Whether the renderer applies the glow post-effect to this layer.
    pub has_glow: bool,
}

/// Compose the three bevel layers, outer first.
#[must_use]
pub fn compose_layers(points: &[StarPoint; ARM_COUNT]) -> Vec<StarLayer> {
    LAYER_TABLE
        .iter()
        .map(|&(scale, fill, stroke, opacity, has_glow)| StarLayer {
            path: path::build_path(&scale_points(points, scale)),
            fill,
            stroke,
            opacity,
            has_glow,
        })
        .collect()
}

/// Scale each arm's radius toward the center and recompute its tip.
///
/// The outline is rebuilt from the scaled tips, so inner-vertex radii derive
/// from the scaled arm radii and the waist proportion holds per layer.
fn scale_points(points: &[StarPoint; ARM_COUNT], scale: f64) -> [StarPoint; ARM_COUNT] {
    points.map(|p| StarPoint {
        radius: p.radius * scale,
        tip: geom::scale_toward(geom::center(), p.tip, scale),
        ..p
    })
}
