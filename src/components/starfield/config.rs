//! Live, externally writable starfield settings.
//!
//! `Config` is what the control panel edits. Nothing here is read by the
//! simulation directly for count and speed: those go through
//! [`RenderState::apply_config`](super::state::RenderState::apply_config).
//! Everything else is read live by the renderer each frame.

use serde::{Deserialize, Serialize};

use super::palette::Palette;

/// Inclusive bounds and step of a tunable numeric field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Smallest allowed value.
	pub min: f64,
	/// Largest allowed value.
	pub max: f64,
	/// Slider increment.
	pub step: f64,
}

impl Bounds {
	/// Bounds from `min` to `max` in increments of `step`.
	pub const fn new(min: f64, max: f64, step: f64) -> Self {
		Self { min, max, step }
	}

	/// Pulls `value` into range. NaN maps to `min`.
	pub fn clamp(&self, value: f64) -> f64 {
		if value.is_nan() {
			return self.min;
		}
		value.clamp(self.min, self.max)
	}
}

/// Active star count.
pub const COUNT_BOUNDS: Bounds = Bounds::new(100.0, 10_000.0, 10.0);
/// Time divisor.
pub const SPEED_BOUNDS: Bounds = Bounds::new(1.0, 100.0, 1.0);
/// Smallest star radius.
pub const SIZE_MIN_BOUNDS: Bounds = Bounds::new(0.1, 2.0, 0.1);
/// Spread added on top of the smallest radius.
pub const SIZE_RANGE_BOUNDS: Bounds = Bounds::new(0.0, 5.0, 0.1);
/// Inner radius of the impact ring.
pub const CURSOR_RADIUS_BOUNDS: Bounds = Bounds::new(0.0, 500.0, 1.0);
/// Width of the impact ring. Never zero.
pub const CURSOR_RANGE_BOUNDS: Bounds = Bounds::new(1.0, 500.0, 1.0);
/// Peak radius boost.
pub const IMPACT_BOUNDS: Bounds = Bounds::new(0.0, 10.0, 0.1);
/// Click pulse length in milliseconds.
pub const CLICK_DURATION_BOUNDS: Bounds = Bounds::new(100.0, 5_000.0, 50.0);
/// Click pulse growth in pixels.
pub const CLICK_SIZE_BOUNDS: Bounds = Bounds::new(0.0, 500.0, 1.0);
/// Panel range for manual cursor placement. Pointer input is not bound by it.
pub const CURSOR_POSITION_BOUNDS: Bounds = Bounds::new(0.0, 3_840.0, 1.0);

/// Star radius parameters: `radius = seed * range + min`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeRange {
	/// Radius of the smallest star.
	pub min: f64,
	/// Extra radius the largest star gets.
	pub range: f64,
}

impl SizeRange {
	/// Radius of the largest star.
	pub fn max(&self) -> f64 {
		self.min + self.range
	}

	/// Radius for a star's size seed.
	pub fn radius(&self, seed: f64) -> f64 {
		seed * self.range + self.min
	}
}

impl Default for SizeRange {
	fn default() -> Self {
		Self {
			min: 0.1,
			range: 2.9,
		}
	}
}

/// Pointer push effect settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
	/// When set, `x`/`y` are only changed from the panel, never by the pointer.
	pub manual: bool,
	/// Cursor position in canvas pixels.
	pub x: f64,
	/// Cursor position in canvas pixels.
	pub y: f64,
	/// Inner radius of the impact annulus, in pixels.
	pub radius: f64,
	/// Width of the impact annulus, in pixels.
	pub range: f64,
	/// Peak radius boost at the middle of the annulus. Zero disables the effect.
	pub impact: f64,
	/// Click pulse length in milliseconds.
	pub click_duration: f64,
	/// How far a click pulse pushes the annulus outward at its end.
	pub click_size: f64,
}

impl Default for CursorConfig {
	fn default() -> Self {
		Self {
			manual: false,
			x: 0.0,
			y: 0.0,
			radius: 60.0,
			range: 120.0,
			impact: 2.0,
			click_duration: 1_000.0,
			click_size: 200.0,
		}
	}
}

/// Complete starfield settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Number of stars drawn.
	pub count: usize,
	/// Time divisor: higher is slower.
	pub speed: f64,
	/// Star radius parameters.
	pub size: SizeRange,
	/// Fill color per bucket.
	pub palette: Palette,
	/// Pointer push effect.
	pub cursor: CursorConfig,
	/// Drive the cursor along the demo path until the pointer moves.
	pub demo: bool,
	/// Outline the impact annulus.
	pub debug: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			count: 1_000,
			speed: 100.0,
			size: SizeRange::default(),
			palette: Palette::default(),
			cursor: CursorConfig::default(),
			demo: true,
			debug: false,
		}
	}
}

impl Config {
	/// Returns a copy with every numeric field pulled into its panel bounds.
	pub fn clamped(mut self) -> Self {
		let count = COUNT_BOUNDS.clamp(self.count as f64);
		self.count = count as usize;
		self.speed = SPEED_BOUNDS.clamp(self.speed);
		self.size.min = SIZE_MIN_BOUNDS.clamp(self.size.min);
		self.size.range = SIZE_RANGE_BOUNDS.clamp(self.size.range);
		self.cursor.radius = CURSOR_RADIUS_BOUNDS.clamp(self.cursor.radius);
		self.cursor.range = CURSOR_RANGE_BOUNDS.clamp(self.cursor.range);
		self.cursor.impact = IMPACT_BOUNDS.clamp(self.cursor.impact);
		self.cursor.click_duration = CLICK_DURATION_BOUNDS.clamp(self.cursor.click_duration);
		self.cursor.click_size = CLICK_SIZE_BOUNDS.clamp(self.cursor.click_size);
		self
	}

	/// Parses a (possibly partial) JSON config. Missing fields take defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<Config>(json).map(Config::clamped)
	}
}
