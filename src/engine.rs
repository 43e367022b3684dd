use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{ARM_COUNT, CANVAS_SIZE};
use crate::geom::Point;
use crate::hit;
use crate::layers::{self, StarLayer};
use crate::points::{self, StarPoint};
use crate::render;
use crate::stats::{PartialStatValues, SnapshotError, StatId, StatValues};
use crate::tooltip::{self, Tooltip};
use crate::transition::{Entrance, TransitionFrame};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// A tooltip became active; the host may mirror it in the DOM.
    TooltipShown(Tooltip),
    /// The active tooltip was retired.
    TooltipHidden,
    /// The host should set the CSS cursor to the given value.
    SetCursor(String),
    /// The scene changed; the host should schedule a redraw.
    RenderNeeded,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// The stat whose tip the pointer is currently over, if any.
    ///
    /// At most one tip is hovered at a time; hovering a new tip implicitly
    /// retires the previous tooltip.
    pub hovered: Option<StatId>,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. Geometry is recomputed from `stats` on demand; nothing
/// derived is cached between calls.
pub struct EngineCore {
    /// Current stat totals, replaced or merged by host updates.
    pub stats: StatValues,
    /// Hover/tooltip state.
    pub ui: UiState,
    /// In-flight entrance ramp, if any.
    pub entrance: Option<Entrance>,
    /// Viewport width in CSS pixels.
    pub viewport_width: f64,
    /// Viewport height in CSS pixels.
    pub viewport_height: f64,
    /// Device pixel ratio of the host canvas.
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            stats: StatValues::new(),
            ui: UiState::default(),
            entrance: None,
            viewport_width: CANVAS_SIZE,
            viewport_height: CANVAS_SIZE,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace all stat totals with a full snapshot and restart the entrance
    /// ramp.
    pub fn load_snapshot(&mut self, stats: StatValues) {
        self.stats = stats;
        self.entrance = Some(Entrance::new());
    }

    /// Hydrate stats from a JSON snapshot payload.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the payload is not a valid stat mapping; stats are
    /// left untouched on error.
    pub fn load_snapshot_json(&mut self, payload: &str) -> Result<(), SnapshotError> {
        self.load_snapshot(StatValues::from_json(payload)?);
        Ok(())
    }

    /// Merge a sparse update into the current totals and restart the
    /// entrance ramp.
    pub fn apply_update(&mut self, partial: &PartialStatValues) {
        self.stats.apply_partial(partial);
        self.entrance = Some(Entrance::new());
    }

    /// Merge a sparse update from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the payload is not a valid sparse stat mapping;
    /// stats are left untouched on error.
    pub fn apply_update_json(&mut self, payload: &str) -> Result<(), SnapshotError> {
        self.apply_update(&PartialStatValues::from_json(payload)?);
        Ok(())
    }

    /// Set a single stat total directly.
    pub fn set_stat(&mut self, stat: StatId, value: u32) {
        self.stats.set(stat, value);
        self.entrance = Some(Entrance::new());
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Transitions ---

    /// Drop the in-flight entrance ramp, e.g. for reduced-motion hosts.
    pub fn cancel_entrance(&mut self) {
        self.entrance = None;
    }

    /// Sample the entrance ramp for this frame, retiring it once done.
    #[must_use]
    pub fn entrance_frame(&mut self, elapsed_ms: f64) -> TransitionFrame {
        match self.entrance {
            Some(ramp) if ramp.finished(elapsed_ms) => {
                self.entrance = None;
                TransitionFrame::RESTING
            }
            Some(ramp) => ramp.sample(elapsed_ms),
            None => TransitionFrame::RESTING,
        }
    }

    // --- Input events ---

    /// Track the pointer and drive hover/tooltip state.
    ///
    /// Returns no actions while the hovered tip is unchanged.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let hovered = hit::hit_tip(pt, &self.points());
        if hovered == self.ui.hovered {
            return Vec::new();
        }
        self.ui.hovered = hovered;

        match hovered {
            Some(stat) => vec![
                Action::TooltipShown(tooltip::describe(&self.points()[stat.index()])),
                Action::SetCursor("pointer".to_owned()),
                Action::RenderNeeded,
            ],
            None => vec![
                Action::TooltipHidden,
                Action::SetCursor("default".to_owned()),
                Action::RenderNeeded,
            ],
        }
    }

    /// The pointer left the canvas; retire any active tooltip.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if self.ui.hovered.is_none() {
            return Vec::new();
        }
        self.ui.hovered = None;
        vec![
            Action::TooltipHidden,
            Action::SetCursor("default".to_owned()),
            Action::RenderNeeded,
        ]
    }

    // --- Queries ---

    /// The five arm points for the current totals, in fixed stat order.
    #[must_use]
    pub fn points(&self) -> [StarPoint; ARM_COUNT] {
        points::compute_points(&self.stats)
    }

    /// The three bevel layers for the current totals, outer first.
    #[must_use]
    pub fn layers(&self) -> Vec<StarLayer> {
        layers::compose_layers(&self.points())
    }

    /// The active tooltip, if a tip is hovered.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        self.ui
            .hovered
            .map(|stat| tooltip::describe(&self.points()[stat.index()]))
    }

    /// The currently hovered stat, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<StatId> {
        self.ui.hovered
    }
}

/// The full widget engine. Wraps `EngineCore` and owns the browser canvas.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no usable 2D rendering context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;
        Ok(Self { canvas, ctx, core: EngineCore::new() })
    }

    // --- Delegated data inputs ---

    pub fn load_snapshot(&mut self, stats: StatValues) {
        self.core.load_snapshot(stats);
    }

    /// Hydrate stats from a JSON snapshot payload.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the payload is not a valid stat mapping.
    pub fn load_snapshot_json(&mut self, payload: &str) -> Result<(), SnapshotError> {
        self.core.load_snapshot_json(payload)
    }

    pub fn apply_update(&mut self, partial: &PartialStatValues) {
        self.core.apply_update(partial);
    }

    /// Merge a sparse update from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the payload is not a valid sparse stat mapping.
    pub fn apply_update_json(&mut self, payload: &str) -> Result<(), SnapshotError> {
        self.core.apply_update_json(payload)
    }

    pub fn set_stat(&mut self, stat: StatId, value: u32) {
        self.core.set_stat(stat, value);
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the canvas backing store.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr) as u32);
        self.canvas.set_height((height_css * dpr) as u32);
    }

    // --- Input events ---

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// `elapsed_ms` is the time since the last snapshot/update, used to
    /// sample the entrance ramp.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any Canvas2D call fails (e.g. invalid context state).
    pub fn render(&mut self, elapsed_ms: f64) -> Result<(), JsValue> {
        let frame = self.core.entrance_frame(elapsed_ms);
        render::draw(&self.ctx, &self.core, frame)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn stats(&self) -> StatValues {
        self.core.stats
    }

    #[must_use]
    pub fn hovered(&self) -> Option<StatId> {
        self.core.hovered()
    }
}
