//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a fullscreen canvas, wires pointer and resize
//! handlers, and runs an animation loop via `requestAnimationFrame` that
//! renders one frame per callback. Count and speed edits reach the
//! simulation through an effect that calls [`RenderState::apply_config`].

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent, Window};

use super::config::Config;
use super::error::SurfaceError;
use super::input;
use super::render;
use super::state::RenderState;

/// Milliseconds on the page's monotonic clock.
fn now() -> f64 {
	web_sys::window()
		.and_then(|w| w.performance())
		.map(|p| p.now())
		.unwrap_or_else(js_sys::Date::now)
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>, fallback: f64| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
	};
	(dim(window.inner_width(), 800.0), dim(window.inner_height(), 600.0))
}

fn acquire_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")
		.map_err(|e| SurfaceError::ContextLookup(format!("{e:?}")))?
		.ok_or(SurfaceError::NoContext)?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| SurfaceError::WrongContextType)
}

/// Pointer position relative to the canvas.
fn canvas_point(canvas: &HtmlCanvasElement, ev: &PointerEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders the animated starfield on a canvas that fills the viewport.
///
/// `config` is read live every frame; count and speed changes are applied
/// through the render state's explicit transition.
#[component]
pub fn StarfieldCanvas(config: RwSignal<Config>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<RenderState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("starfield: {}", SurfaceError::NoWindow);
			return;
		};
		let mut ctx = match acquire_context(&canvas) {
			Ok(ctx) => ctx,
			Err(e) => {
				error!("starfield: {}", e);
				return;
			}
		};

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		info!("starfield: canvas {}x{}", w, h);

		let initial = config.get_untracked();
		*state_init.borrow_mut() = Some(RenderState::new(&initial, w, h, now(), random_seed()));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				input::resize(s, nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				config.with_untracked(|cfg| {
					render::render(&mut ctx, s, cfg, now());
				});
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Only count and speed need an explicit apply; everything else is read live.
	let applied = Memo::new(move |_| config.with(|c| (c.count, c.speed)));
	let state_apply = state.clone();
	Effect::new(move |_| {
		applied.track();
		if let Some(ref mut s) = *state_apply.borrow_mut() {
			config.with_untracked(|cfg| s.apply_config(cfg, now()));
		}
	});

	let on_pointermove = move |ev: PointerEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		config.update(|c| input::pointer_move(c, x, y));
	};

	let state_pd = state.clone();
	let on_pointerdown = move |_: PointerEvent| {
		if let Some(ref mut s) = *state_pd.borrow_mut() {
			input::pointer_down(s, now());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="starfield-canvas"
			on:pointermove=on_pointermove
			on:pointerdown=on_pointerdown
			style="display: block; touch-action: none;"
		/>
	}
}
