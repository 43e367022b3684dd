//! Shared numeric constants for the statstar crate.

// ── Canvas ──────────────────────────────────────────────────────

/// Width and height of the logical canvas, in CSS pixels.
pub const CANVAS_SIZE: f64 = 400.0;

/// X coordinate of the star center on the logical canvas.
pub const CENTER_X: f64 = 200.0;

/// Y coordinate of the star center on the logical canvas.
pub const CENTER_Y: f64 = 200.0;

// ── Arms ────────────────────────────────────────────────────────

/// Number of arms on the star; one per stat.
pub const ARM_COUNT: usize = 5;

/// Arm radius when a stat's normalized value is 0.
pub const MIN_RADIUS: f64 = 30.0;

/// Arm radius when a stat's normalized value is 1.
pub const MAX_RADIUS: f64 = 150.0;

/// 2π / 5 (72°) — angular step between adjacent arms.
pub const ARM_ANGLE_STEP: f64 = std::f64::consts::TAU / 5.0;

/// −π / 2 — angular offset so arm 0 points straight up.
pub const ARM_ANGLE_OFFSET: f64 = -std::f64::consts::FRAC_PI_2;

// ── Normalization ───────────────────────────────────────────────

/// Largest maximum stat value that still uses the absolute 0–20 scale.
pub const SMALL_SCALE_CUTOFF: u32 = 20;

/// Minimum normalized value for a non-zero stat on the relative scale.
pub const VISIBILITY_FLOOR: f64 = 0.1;

// ── Waist ───────────────────────────────────────────────────────

/// Inner-vertex radius as a fraction of the adjacent arms' mean radius.
pub const INNER_RADIUS_FACTOR: f64 = 0.4;

// ── Interaction ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels around an arm tip.
pub const TIP_HIT_RADIUS_PX: f64 = 14.0;

/// Vertical offset in pixels from an arm tip to its tooltip anchor.
pub const TOOLTIP_OFFSET_PX: f64 = 18.0;

// ── Glow ────────────────────────────────────────────────────────

/// Blur radius in pixels for the innermost layer's glow.
pub const GLOW_BLUR_PX: f64 = 8.0;
