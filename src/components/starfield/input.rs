//! Host input handlers.
//!
//! Kept free of DOM types so the component only translates events into
//! canvas-relative coordinates and timestamps.

use super::config::Config;
use super::state::RenderState;

/// Pointer moved to `(x, y)` in canvas pixels.
///
/// Real movement ends the demo; it stays off until re-enabled from the panel.
pub fn pointer_move(config: &mut Config, x: f64, y: f64) {
	config.demo = false;
	if !config.cursor.manual {
		config.cursor.x = x;
		config.cursor.y = y;
	}
}

/// Pointer pressed at time `now` (milliseconds).
pub fn pointer_down(state: &mut RenderState, now: f64) {
	state.press(now);
}

/// Viewport resized. Star positions are normalized, so nothing is regenerated.
pub fn resize(state: &mut RenderState, width: f64, height: f64) {
	state.resize(width, height);
}
