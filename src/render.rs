//! Rendering: draws the star scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only engine state
//! and produces pixels — it does not mutate any application state. The whole
//! scene is cleared and redrawn in one synchronous pass, so the host never
//! observes a mix of old and new geometry.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{CANVAS_SIZE, CENTER_X, CENTER_Y, GLOW_BLUR_PX};
use crate::engine::EngineCore;
use crate::layers::{BRIGHT_GOLD, StarLayer};
use crate::path::PathCmd;
use crate::tooltip::Tooltip;
use crate::transition::TransitionFrame;

/// Outline stroke width in logical pixels.
const STROKE_WIDTH: f64 = 2.0;

/// Tooltip label font size in logical pixels.
const TOOLTIP_FONT_PX: f64 = 12.0;

/// Horizontal padding inside the tooltip box.
const TOOLTIP_PAD_X: f64 = 8.0;

/// Vertical padding inside the tooltip box.
const TOOLTIP_PAD_Y: f64 = 5.0;

/// Tooltip background fill.
const TOOLTIP_BG: &str = "rgba(31, 26, 23, 0.85)";

/// Draw the full scene: bevel layers and the active tooltip.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore, frame: TransitionFrame) -> Result<(), JsValue> {
    let (vw, vh, dpr) = (core.viewport_width, core.viewport_height, core.dpr);

    // Layer 1: clear and fit the 400×400 logical canvas into the viewport.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, vw, vh);
    let fit = vw.min(vh) / CANVAS_SIZE;
    ctx.translate((vw - CANVAS_SIZE * fit) * 0.5, (vh - CANVAS_SIZE * fit) * 0.5)?;
    ctx.scale(fit, fit)?;

    // Layer 2: the star, scaled about its center by the entrance frame.
    ctx.save();
    ctx.translate(CENTER_X, CENTER_Y)?;
    ctx.scale(frame.scale, frame.scale)?;
    ctx.translate(-CENTER_X, -CENTER_Y)?;
    let layers = core.layers();
    for layer in &layers {
        draw_layer(ctx, layer, frame.opacity);
    }
    ctx.restore();

    // Layer 3: tooltip, always at full scale and opacity.
    ctx.set_global_alpha(1.0);
    if let Some(tip) = core.tooltip() {
        draw_tooltip(ctx, &tip)?;
    }

    Ok(())
}

// =============================================================
// Star layers
// =============================================================

fn draw_layer(ctx: &CanvasRenderingContext2d, layer: &StarLayer, base_alpha: f64) {
    trace_path(ctx, &layer.path);
    ctx.set_global_alpha(base_alpha * layer.opacity);

    if layer.has_glow {
        ctx.set_shadow_color(BRIGHT_GOLD);
        ctx.set_shadow_blur(GLOW_BLUR_PX);
    }

    ctx.set_fill_style_str(layer.fill);
    ctx.fill();
    ctx.set_stroke_style_str(layer.stroke);
    ctx.set_line_width(STROKE_WIDTH);
    ctx.stroke();

    // Shadow state leaks across layers otherwise.
    ctx.set_shadow_blur(0.0);
}

/// Replay a command list onto the context as a fresh path.
fn trace_path(ctx: &CanvasRenderingContext2d, cmds: &[PathCmd]) {
    ctx.begin_path();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathCmd::LineTo(p) => ctx.line_to(p.x, p.y),
            PathCmd::Close => ctx.close_path(),
        }
    }
}

// =============================================================
// Tooltip
// =============================================================

fn draw_tooltip(ctx: &CanvasRenderingContext2d, tip: &Tooltip) -> Result<(), JsValue> {
    ctx.set_font(&format!("{TOOLTIP_FONT_PX}px sans-serif"));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    let text_w = ctx.measure_text(&tip.text)?.width();
    let box_w = text_w + TOOLTIP_PAD_X * 2.0;
    let box_h = TOOLTIP_FONT_PX + TOOLTIP_PAD_Y * 2.0;

    ctx.set_fill_style_str(TOOLTIP_BG);
    ctx.fill_rect(tip.anchor.x - box_w * 0.5, tip.anchor.y - box_h * 0.5, box_w, box_h);

    ctx.set_fill_style_str(tip.stat.accent_color());
    ctx.fill_text(&tip.text, tip.anchor.x, tip.anchor.y)?;
    Ok(())
}
