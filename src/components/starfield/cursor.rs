//! Cursor push effect.
//!
//! Stars inside a ring around the cursor are drawn larger. The ring starts
//! at the cursor radius (optionally widened by a click pulse) and is `range`
//! pixels wide; the boost is a half sine across it, zero on both edges.

use std::f64::consts::PI;

use rand::Rng;

use super::config::CursorConfig;

/// Per-frame chance threshold for the demo's synthetic click.
const DEMO_CLICK_THRESHOLD: f64 = 0.999;

/// Radius boost for a star `distance` pixels from the cursor.
pub fn impact(distance: f64, cursor_radius: f64, range: f64, magnitude: f64) -> f64 {
	if range <= 0.0 || distance <= cursor_radius || distance >= cursor_radius + range {
		return 0.0;
	}
	magnitude * ((distance - cursor_radius) * PI / range).sin()
}

/// Closed-form wandering cursor used while the demo flag is set.
pub fn demo_path(position: f64, width: f64, height: f64) -> (f64, f64) {
	let p = position / 10.0;
	let (half_w, half_h) = (width / 2.0, height / 2.0);
	(
		half_w + half_w * p.sin() * (1.5 * p).sin().tan(),
		half_h + half_h * (2.0 * p).sin() * p.cos().tan(),
	)
}

/// Expanding ring started by a click.
#[derive(Clone, Debug, Default)]
pub struct ClickPulse {
	started_at: Option<f64>,
}

impl ClickPulse {
	/// Starts (or restarts) the pulse at `now`.
	pub fn start(&mut self, now: f64) {
		self.started_at = Some(now);
	}

	/// Whether a pulse is still running.
	pub fn is_active(&self) -> bool {
		self.started_at.is_some()
	}

	/// Extra cursor radius at `now`. Clears the pulse once it has run its course.
	pub fn radius_boost(&mut self, now: f64, duration: f64, size: f64) -> f64 {
		let Some(started_at) = self.started_at else {
			return 0.0;
		};
		let elapsed = (now - started_at).max(0.0);
		if elapsed >= duration {
			self.started_at = None;
			return 0.0;
		}
		elapsed / duration * size
	}

	/// Rolls the demo's rare synthetic click. Returns whether one started.
	pub fn maybe_demo_click<R: Rng>(&mut self, now: f64, rng: &mut R) -> bool {
		if self.is_active() || rng.random::<f64>() <= DEMO_CLICK_THRESHOLD {
			return false;
		}
		self.start(now);
		true
	}
}

/// Resolved cursor for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorField {
	/// Cursor position in canvas pixels.
	pub x: f64,
	/// Cursor position in canvas pixels.
	pub y: f64,
	/// Inner ring radius, click pulse included.
	pub radius: f64,
	/// Ring width.
	pub range: f64,
	/// Peak boost.
	pub impact: f64,
}

impl CursorField {
	/// Ring at `(x, y)` with inner `radius`; width and boost from `config`.
	pub fn new(x: f64, y: f64, radius: f64, config: &CursorConfig) -> Self {
		Self {
			x,
			y,
			radius,
			range: config.range,
			impact: config.impact,
		}
	}

	/// Whether the effect changes anything.
	pub fn is_enabled(&self) -> bool {
		self.impact > 0.0
	}

	/// Radius boost for a star drawn at `(x, y)`.
	pub fn boost(&self, x: f64, y: f64) -> f64 {
		if !self.is_enabled() {
			return 0.0;
		}
		let distance = (x - self.x).hypot(y - self.y);
		impact(distance, self.radius, self.range, self.impact)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	const EPS: f64 = 1e-9;

	#[test]
	fn impact_vanishes_on_both_edges() {
		assert_eq!(impact(50.0, 50.0, 100.0, 3.0), 0.0);
		assert_eq!(impact(150.0, 50.0, 100.0, 3.0), 0.0);
	}

	#[test]
	fn impact_peaks_mid_ring() {
		assert!((impact(100.0, 50.0, 100.0, 3.0) - 3.0).abs() < EPS);
		let quarter = impact(75.0, 50.0, 100.0, 3.0);
		assert!((quarter - 3.0 * (PI / 4.0).sin()).abs() < EPS);
	}

	#[test]
	fn impact_is_zero_outside_ring() {
		assert_eq!(impact(10.0, 50.0, 100.0, 3.0), 0.0);
		assert_eq!(impact(400.0, 50.0, 100.0, 3.0), 0.0);
		assert_eq!(impact(100.0, 50.0, 0.0, 3.0), 0.0);
	}

	#[test]
	fn click_pulse_grows_then_expires() {
		let mut pulse = ClickPulse::default();
		assert_eq!(pulse.radius_boost(0.0, 1000.0, 200.0), 0.0);

		pulse.start(1000.0);
		assert_eq!(pulse.radius_boost(1000.0, 1000.0, 200.0), 0.0);
		assert!((pulse.radius_boost(1250.0, 1000.0, 200.0) - 50.0).abs() < EPS);
		assert!((pulse.radius_boost(1999.0, 1000.0, 200.0) - 199.8).abs() < EPS);
		assert!(pulse.is_active());

		assert_eq!(pulse.radius_boost(2000.0, 1000.0, 200.0), 0.0);
		assert!(!pulse.is_active());
	}

	#[test]
	fn demo_click_is_rare() {
		let mut rng = ChaCha8Rng::seed_from_u64(3);
		let mut pulse = ClickPulse::default();
		let mut clicks = 0;
		for frame in 0..100_000 {
			if pulse.maybe_demo_click(frame as f64, &mut rng) {
				clicks += 1;
			}
			// Expire immediately so every frame gets a roll.
			pulse.radius_boost(frame as f64 + 1.0, 1.0, 1.0);
		}
		assert!(clicks > 20 && clicks < 250, "clicks = {clicks}");
	}

	#[test]
	fn demo_click_never_interrupts_a_pulse() {
		let mut rng = ChaCha8Rng::seed_from_u64(3);
		let mut pulse = ClickPulse::default();
		pulse.start(5.0);
		for _ in 0..10_000 {
			assert!(!pulse.maybe_demo_click(10.0, &mut rng));
		}
	}

	#[test]
	fn demo_path_starts_at_center() {
		let (x, y) = demo_path(0.0, 800.0, 600.0);
		assert!((x - 400.0).abs() < EPS);
		assert!((y - 300.0).abs() < EPS);
	}

	#[test]
	fn demo_path_is_deterministic() {
		assert_eq!(demo_path(123.4, 800.0, 600.0), demo_path(123.4, 800.0, 600.0));
	}

	#[test]
	fn disabled_field_never_boosts() {
		let config = CursorConfig {
			impact: 0.0,
			..CursorConfig::default()
		};
		let field = CursorField::new(0.0, 0.0, 10.0, &config);
		assert!(!field.is_enabled());
		assert_eq!(field.boost(10.0 + config.range / 2.0, 0.0), 0.0);
	}

	#[test]
	fn field_boost_uses_euclidean_distance() {
		let config = CursorConfig {
			range: 100.0,
			impact: 4.0,
			..CursorConfig::default()
		};
		let field = CursorField::new(100.0, 100.0, 50.0, &config);
		// 3-4-5 triangle scaled to distance 100 (mid ring).
		assert!((field.boost(160.0, 180.0) - 4.0).abs() < EPS);
	}
}
