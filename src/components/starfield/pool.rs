//! Reusable star pool.
//!
//! Stars are stored with normalized attributes so the pool survives viewport
//! resizes untouched. The pool only ever grows: lowering the active count
//! leaves the tail allocated, and raising it again regenerates those slots in
//! place before appending anything new.

use std::f64::consts::TAU;

use rand::Rng;

/// Upper bound on simultaneously active stars.
pub const MAX_STARS: usize = 10_000;

/// A single star. All fields are drawn uniformly at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
	/// Horizontal origin, as a fraction of the viewport width.
	pub x: f64,
	/// Vertical origin, as a fraction of the viewport height.
	pub y: f64,
	/// Radius seed in `[0, 1)`.
	pub size: f64,
	/// Drift direction in radians.
	pub angle: f64,
	/// Reserved; not used by the renderer.
	pub velocity: f64,
}

impl Star {
	/// Draws every attribute independently and uniformly.
	pub fn random<R: Rng>(rng: &mut R) -> Self {
		Self {
			size: rng.random(),
			x: rng.random(),
			y: rng.random(),
			angle: rng.random::<f64>() * TAU,
			velocity: rng.random(),
		}
	}
}

/// How [`StarPool::ensure_count`] satisfied a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Growth {
	/// Slots past the old active count that were regenerated in place.
	pub recycled: usize,
	/// Stars pushed onto the end of the pool.
	pub appended: usize,
}

/// Pre-allocated pool of stars with an active prefix.
#[derive(Clone, Debug)]
pub struct StarPool {
	stars: Vec<Star>,
	active: usize,
}

impl Default for StarPool {
	fn default() -> Self {
		Self::new()
	}
}

impl StarPool {
	/// Empty pool with room for [`MAX_STARS`].
	pub fn new() -> Self {
		Self {
			stars: Vec::with_capacity(MAX_STARS),
			active: 0,
		}
	}

	/// Makes the first `count` stars active, regenerating reused slots and
	/// appending fresh stars as needed. `count` is capped at [`MAX_STARS`].
	pub fn ensure_count<R: Rng>(&mut self, count: usize, rng: &mut R) -> Growth {
		let count = count.min(MAX_STARS);
		let mut growth = Growth::default();

		if self.active < count {
			let needed = count - self.active;
			growth.recycled = needed.min(self.stars.len() - self.active);
			growth.appended = needed - growth.recycled;

			let recycle_end = self.active + growth.recycled;
			for star in &mut self.stars[self.active..recycle_end] {
				*star = Star::random(rng);
			}
			self.stars.extend((0..growth.appended).map(|_| Star::random(rng)));
		}

		self.active = count;
		growth
	}

	/// Number of stars drawn each frame.
	pub fn active(&self) -> usize {
		self.active
	}

	/// Number of initialized slots, active or not.
	pub fn allocated(&self) -> usize {
		self.stars.len()
	}

	/// The active prefix.
	pub fn stars(&self) -> &[Star] {
		&self.stars[..self.active]
	}
}
