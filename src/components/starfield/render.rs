//! Canvas rendering for the starfield.
//!
//! Each frame clears the surface and draws every active star as a filled
//! circle. Stars are grouped into one path per palette bucket: the path is
//! filled when the bucket changes, so a frame costs `PALETTE_LEN` fills no
//! matter how many stars are drawn.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::config::Config;
use super::palette::Color;
use super::state::{Frame, RenderState};

/// Annulus outline color in debug mode.
const DEBUG_RING: Color = Color::rgb(0xff, 0xff, 0xff);

/// The drawing primitives the renderer needs.
pub trait Surface {
	fn clear(&mut self, width: f64, height: f64);
	fn begin_path(&mut self);
	fn set_fill(&mut self, color: Color);
	fn move_to(&mut self, x: f64, y: f64);
	/// Adds a full circle to the current path.
	fn circle(&mut self, x: f64, y: f64, radius: f64);
	fn fill(&mut self);
	fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn begin_path(&mut self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn set_fill(&mut self, color: Color) {
		self.set_fill_style_str(&color.to_css());
	}

	fn move_to(&mut self, x: f64, y: f64) {
		CanvasRenderingContext2d::move_to(self, x, y);
	}

	fn circle(&mut self, x: f64, y: f64, radius: f64) {
		let _ = self.arc(x, y, radius, 0.0, TAU);
	}

	fn fill(&mut self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		CanvasRenderingContext2d::begin_path(self);
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(1.0);
		self.stroke();
	}
}

/// Renders one frame at time `now` (milliseconds).
pub fn render<S: Surface + ?Sized>(
	surface: &mut S,
	state: &mut RenderState,
	config: &Config,
	now: f64,
) -> Frame {
	let frame = state.begin_frame(config, now);
	surface.clear(frame.width, frame.height);

	let mut bucket = None;
	for (i, star) in state.stars().iter().enumerate() {
		let (x, y) = frame.project(star);

		let b = frame.bucket(i);
		if bucket != Some(b) {
			if bucket.is_some() {
				surface.fill();
			}
			surface.set_fill(config.palette.get(b));
			surface.begin_path();
			bucket = Some(b);
		}

		let radius = config.size.radius(star.size) + frame.cursor.boost(x, y);
		surface.move_to(x, y);
		surface.circle(x, y, radius);
	}
	if bucket.is_some() {
		surface.fill();
	}

	if config.debug && frame.cursor.is_enabled() {
		draw_cursor_ring(surface, &frame);
	}

	frame
}

fn draw_cursor_ring<S: Surface + ?Sized>(surface: &mut S, frame: &Frame) {
	let cursor = &frame.cursor;
	surface.stroke_circle(cursor.x, cursor.y, cursor.radius, DEBUG_RING);
	surface.stroke_circle(cursor.x, cursor.y, cursor.radius + cursor.range, DEBUG_RING);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::starfield::config::SizeRange;
	use crate::components::starfield::palette::Palette;

	#[derive(Clone, Debug, PartialEq)]
	enum Op {
		Clear(f64, f64),
		BeginPath,
		SetFill(Color),
		MoveTo(f64, f64),
		Circle(f64, f64, f64),
		Fill,
		Stroke(f64, f64, f64),
	}

	#[derive(Default)]
	struct Recorder {
		ops: Vec<Op>,
	}

	impl Surface for Recorder {
		fn clear(&mut self, width: f64, height: f64) {
			self.ops.push(Op::Clear(width, height));
		}
		fn begin_path(&mut self) {
			self.ops.push(Op::BeginPath);
		}
		fn set_fill(&mut self, color: Color) {
			self.ops.push(Op::SetFill(color));
		}
		fn move_to(&mut self, x: f64, y: f64) {
			self.ops.push(Op::MoveTo(x, y));
		}
		fn circle(&mut self, x: f64, y: f64, radius: f64) {
			self.ops.push(Op::Circle(x, y, radius));
		}
		fn fill(&mut self) {
			self.ops.push(Op::Fill);
		}
		fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, _color: Color) {
			self.ops.push(Op::Stroke(x, y, radius));
		}
	}

	impl Recorder {
		fn circles(&self) -> Vec<(f64, f64, f64)> {
			self.ops
				.iter()
				.filter_map(|op| match *op {
					Op::Circle(x, y, r) => Some((x, y, r)),
					_ => None,
				})
				.collect()
		}
	}

	fn quiet_config(count: usize) -> Config {
		let mut config = Config {
			count,
			speed: 100.0,
			size: SizeRange {
				min: 0.1,
				range: 2.9,
			},
			palette: Palette::spectrum(),
			demo: false,
			..Config::default()
		};
		config.cursor.impact = 0.0;
		config
	}

	#[test]
	fn buckets_switch_every_fifth_of_the_field() {
		let config = quiet_config(1000);
		let mut state = RenderState::new(&config, 800.0, 600.0, 0.0, 11);
		let mut surface = Recorder::default();
		render(&mut surface, &mut state, &config, 16.0);

		assert_eq!(surface.ops[0], Op::Clear(800.0, 600.0));

		// Star index at which each color starts.
		let mut starts = Vec::new();
		let mut drawn = 0;
		for op in &surface.ops {
			match op {
				Op::SetFill(color) => starts.push((drawn, *color)),
				Op::Circle(..) => drawn += 1,
				_ => {}
			}
		}
		let expected: Vec<_> = [0, 200, 400, 600, 800]
			.into_iter()
			.zip(Palette::spectrum().iter().copied())
			.collect();
		assert_eq!(starts, expected);
		assert_eq!(drawn, 1000);
	}

	#[test]
	fn every_bucket_is_flushed_before_switching() {
		let config = quiet_config(1000);
		let mut state = RenderState::new(&config, 800.0, 600.0, 0.0, 11);
		let mut surface = Recorder::default();
		render(&mut surface, &mut state, &config, 16.0);

		let fills = surface.ops.iter().filter(|op| **op == Op::Fill).count();
		assert_eq!(fills, 5);
		assert_eq!(surface.ops.last(), Some(&Op::Fill));

		// No fill style change while a path holds unfilled arcs.
		let mut pending = false;
		for op in &surface.ops {
			match op {
				Op::Circle(..) => pending = true,
				Op::Fill => pending = false,
				Op::SetFill(_) => assert!(!pending),
				_ => {}
			}
		}
	}

	#[test]
	fn uneven_count_folds_into_last_bucket() {
		let config = quiet_config(1003);
		let mut state = RenderState::new(&config, 800.0, 600.0, 0.0, 11);
		let mut surface = Recorder::default();
		render(&mut surface, &mut state, &config, 16.0);

		let colors: Vec<_> = surface
			.ops
			.iter()
			.filter_map(|op| match op {
				Op::SetFill(c) => Some(*c),
				_ => None,
			})
			.collect();
		assert_eq!(colors, Palette::spectrum().0.to_vec());
		assert_eq!(surface.circles().len(), 1003);
	}

	#[test]
	fn radius_follows_size_settings_without_impact() {
		let config = quiet_config(500);
		let mut state = RenderState::new(&config, 800.0, 600.0, 0.0, 5);
		let mut surface = Recorder::default();
		render(&mut surface, &mut state, &config, 0.0);

		for ((_, _, r), star) in surface.circles().iter().zip(state.stars()) {
			assert!((r - (star.size * 2.9 + 0.1)).abs() < 1e-12);
			assert!(*r >= 0.1 && *r < 3.0 + 1e-12);
		}
	}

	#[test]
	fn impact_only_grows_stars() {
		let mut config = quiet_config(3000);
		config.cursor.impact = 5.0;
		config.cursor.x = 400.0;
		config.cursor.y = 300.0;
		let mut state = RenderState::new(&config, 800.0, 600.0, 0.0, 5);
		let mut surface = Recorder::default();
		let frame = render(&mut surface, &mut state, &config, 0.0);

		let mut boosted = 0;
		for ((x, y, r), star) in surface.circles().iter().zip(state.stars()) {
			let base = config.size.radius(star.size);
			assert!(*r >= base - 1e-12);
			let d = (x - 400.0).hypot(y - 300.0);
			let inside = d > frame.cursor.radius && d < frame.cursor.radius + frame.cursor.range;
			if *r > base + 1e-12 {
				assert!(inside);
				boosted += 1;
			}
		}
		assert!(boosted > 0);
	}

	#[test]
	fn debug_outlines_the_annulus() {
		let mut config = quiet_config(100);
		config.debug = true;
		config.cursor.impact = 1.0;
		config.cursor.x = 10.0;
		config.cursor.y = 20.0;
		let mut state = RenderState::new(&config, 800.0, 600.0, 0.0, 5);
		let mut surface = Recorder::default();
		render(&mut surface, &mut state, &config, 0.0);

		let strokes: Vec<_> = surface
			.ops
			.iter()
			.filter(|op| matches!(op, Op::Stroke(..)))
			.cloned()
			.collect();
		assert_eq!(
			strokes,
			vec![
				Op::Stroke(10.0, 20.0, config.cursor.radius),
				Op::Stroke(10.0, 20.0, config.cursor.radius + config.cursor.range),
			]
		);
	}

	#[test]
	fn sixty_frames_drift_smoothly() {
		let config = quiet_config(1000);
		let (width, height) = (1280.0, 720.0);
		let mut state = RenderState::new(&config, width, height, 0.0, 42);
		let start = 250_000.0;

		let mut previous: Option<Vec<(f64, f64, f64)>> = None;
		for frame_no in 0..60 {
			let now = start + frame_no as f64 * 16.0;
			let mut surface = Recorder::default();
			render(&mut surface, &mut state, &config, now);
			let circles = surface.circles();
			assert_eq!(circles.len(), state.current_count());

			for &(x, y, _) in &circles {
				assert!((0.0..width).contains(&x));
				assert!((0.0..height).contains(&y));
			}

			if let Some(prev) = &previous {
				// 16 ms at speed 100 moves each star at most 0.16 px.
				for (&(x0, y0, r0), &(x1, y1, r1)) in prev.iter().zip(&circles) {
					let dx = (x1 - x0).abs();
					let dy = (y1 - y0).abs();
					assert!(dx.min(width - dx) <= 0.16 + 1e-6);
					assert!(dy.min(height - dy) <= 0.16 + 1e-6);
					assert_eq!(r0, r1);
				}
			}
			previous = Some(circles);
		}
	}

	#[test]
	fn speed_change_mid_run_does_not_jump() {
		let mut config = quiet_config(500);
		let mut state = RenderState::new(&config, 800.0, 600.0, 0.0, 3);

		let mut surface = Recorder::default();
		render(&mut surface, &mut state, &config, 90_000.0);
		let before = surface.circles();

		config.speed = 7.0;
		state.apply_config(&config, 90_000.0);
		let mut surface = Recorder::default();
		render(&mut surface, &mut state, &config, 90_000.0);
		let after = surface.circles();

		for (&(x0, y0, _), &(x1, y1, _)) in before.iter().zip(&after) {
			let (dx, dy) = ((x1 - x0).abs(), (y1 - y0).abs());
			assert!(dx.min(800.0 - dx) < 1e-6);
			assert!(dy.min(600.0 - dy) < 1e-6);
		}
	}
}
