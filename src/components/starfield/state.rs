//! Applied render snapshot.
//!
//! `RenderState` owns the star pool and the last applied count and speed.
//! Live [`Config`] edits reach it only through [`RenderState::apply_config`],
//! so a UI layer can edit freely and apply at its own pace.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::Config;
use super::cursor::{ClickPulse, CursorField, demo_path};
use super::palette::PALETTE_LEN;
use super::pool::{Star, StarPool};

/// Smallest viewport side the projection works with.
const MIN_EXTENT: f64 = 1.0;

/// Euclidean modulo that never returns `modulus` itself.
fn wrap(value: f64, modulus: f64) -> f64 {
	let r = value.rem_euclid(modulus);
	if r >= modulus { 0.0 } else { r }
}

/// Per-frame geometry shared by every star.
#[derive(Clone, Debug)]
pub struct Frame {
	/// Time-driven drift distance, in pixels along each star's direction.
	pub position: f64,
	/// Viewport width in pixels.
	pub width: f64,
	/// Viewport height in pixels.
	pub height: f64,
	/// Whole viewport widths added so the wrapped x stays non-negative.
	pub base_width: f64,
	/// Whole viewport heights added so the wrapped y stays non-negative.
	pub base_height: f64,
	/// Stars per color bucket.
	pub color_switch_count: usize,
	/// Cursor ring for this frame.
	pub cursor: CursorField,
}

impl Frame {
	/// Screen position of a star, always inside `[0, width) x [0, height)`.
	pub fn project(&self, star: &Star) -> (f64, f64) {
		let x = self.base_width + star.x * self.width + star.angle.sin() * self.position;
		let y = self.base_height + star.y * self.height + star.angle.cos() * self.position;
		(wrap(x, self.width), wrap(y, self.height))
	}

	/// Palette bucket of the star at `index`. The last bucket takes the remainder.
	pub fn bucket(&self, index: usize) -> usize {
		(index / self.color_switch_count).min(PALETTE_LEN - 1)
	}
}

/// Owned simulation state: pool, phase offset and applied settings.
pub struct RenderState {
	pool: StarPool,
	position_offset: f64,
	current_speed: f64,
	color_switch_count: usize,
	/// Viewport width in pixels, at least one.
	pub width: f64,
	/// Viewport height in pixels, at least one.
	pub height: f64,
	/// Click pulse widening the cursor ring.
	pub pulse: ClickPulse,
	rng: ChaCha8Rng,
}

impl RenderState {
	/// Builds a state with `config` already applied at time `now`.
	pub fn new(config: &Config, width: f64, height: f64, now: f64, seed: u64) -> Self {
		let mut state = Self {
			pool: StarPool::new(),
			position_offset: 0.0,
			current_speed: config.speed,
			color_switch_count: 1,
			width: width.max(MIN_EXTENT),
			height: height.max(MIN_EXTENT),
			pulse: ClickPulse::default(),
			rng: ChaCha8Rng::seed_from_u64(seed),
		};
		state.apply_count(config.count);
		state.apply_config(config, now);
		state
	}

	/// Brings count and speed in line with `config`. Other fields are read
	/// live while rendering.
	pub fn apply_config(&mut self, config: &Config, now: f64) {
		if config.count != self.pool.active() {
			self.apply_count(config.count);
		}
		if config.speed != self.current_speed {
			self.retune(config.speed, now);
		}
	}

	/// Sets the active star count, reusing pooled slots where possible.
	pub fn apply_count(&mut self, count: usize) {
		let previous = self.pool.active();
		let growth = self.pool.ensure_count(count, &mut self.rng);
		self.color_switch_count = (self.pool.active() / PALETTE_LEN).max(1);
		debug!(
			"starfield: count {} -> {} (recycled {}, appended {}, pool {})",
			previous,
			self.pool.active(),
			growth.recycled,
			growth.appended,
			self.pool.allocated()
		);
	}

	/// Changes speed without a visible jump: the phase offset absorbs the
	/// difference between old and new time scaling at `now`.
	pub fn retune(&mut self, speed: f64, now: f64) {
		let old_position = now / self.current_speed;
		let new_position = now / speed;
		self.position_offset += old_position - new_position;
		debug!(
			"starfield: speed {} -> {} (offset {:.3})",
			self.current_speed, speed, self.position_offset
		);
		self.current_speed = speed;
	}

	/// Drift distance at `now`.
	pub fn position(&self, now: f64) -> f64 {
		self.position_offset + now / self.current_speed
	}

	/// Accumulated phase correction from speed changes.
	pub fn position_offset(&self) -> f64 {
		self.position_offset
	}

	/// Last applied speed.
	pub fn current_speed(&self) -> f64 {
		self.current_speed
	}

	/// Last applied star count.
	pub fn current_count(&self) -> usize {
		self.pool.active()
	}

	/// Stars per color bucket.
	pub fn color_switch_count(&self) -> usize {
		self.color_switch_count
	}

	/// The backing pool, including inactive slots.
	pub fn pool(&self) -> &StarPool {
		&self.pool
	}

	/// Active stars in draw order.
	pub fn stars(&self) -> &[Star] {
		self.pool.stars()
	}

	/// Follows the viewport. Degenerate sizes are raised to one pixel.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(MIN_EXTENT);
		self.height = height.max(MIN_EXTENT);
	}

	/// Starts a click pulse at `now`.
	pub fn press(&mut self, now: f64) {
		self.pulse.start(now);
	}

	/// Resolves shared geometry for the frame at `now`. Advances the click
	/// pulse and, in demo mode, may start a synthetic click.
	pub fn begin_frame(&mut self, config: &Config, now: f64) -> Frame {
		let position = self.position(now);
		let tiles = position.ceil();

		let cursor_config = &config.cursor;
		let (cx, cy) = if cursor_config.manual {
			(cursor_config.x, cursor_config.y)
		} else if config.demo {
			if self.pulse.maybe_demo_click(now, &mut self.rng) {
				debug!("starfield: demo click");
			}
			demo_path(position, self.width, self.height)
		} else {
			(cursor_config.x, cursor_config.y)
		};
		let pulse = self.pulse.radius_boost(
			now,
			cursor_config.click_duration,
			cursor_config.click_size,
		);

		Frame {
			position,
			width: self.width,
			height: self.height,
			base_width: tiles * self.width,
			base_height: tiles * self.height,
			color_switch_count: self.color_switch_count,
			cursor: CursorField::new(cx, cy, cursor_config.radius + pulse, cursor_config),
		}
	}
}
