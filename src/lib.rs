//! starfield: an animated field of drifting, colored points.
//!
//! This crate provides a WASM canvas component that renders a drifting
//! starfield, a live tuning panel, and a cursor push effect.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::starfield::{Config, ControlPanel, StarfieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield: logging initialized");
}

/// Load the initial settings from a script element with id="starfield-config".
/// Expected format: a JSON object with any subset of the `Config` fields.
fn load_config() -> Option<Config> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("starfield-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match Config::from_json(&json_text) {
		Ok(config) => {
			info!(
				"starfield: loaded config ({} stars, speed {})",
				config.count, config.speed
			);
			Some(config)
		}
		Err(e) => {
			warn!("starfield: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads settings from the DOM and renders the starfield with its panel.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = RwSignal::new(load_config().unwrap_or_default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Starfield" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-starfield">
			<StarfieldCanvas config=config />
			<ControlPanel config=config />
		</div>
	}
}
