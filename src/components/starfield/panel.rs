//! Live settings panel.
//!
//! Every control writes straight into the shared [`Config`] signal. The
//! canvas component decides what needs an explicit apply step.

use leptos::prelude::*;

use super::config::{
	Bounds, CLICK_DURATION_BOUNDS, CLICK_SIZE_BOUNDS, COUNT_BOUNDS, CURSOR_POSITION_BOUNDS,
	CURSOR_RADIUS_BOUNDS, CURSOR_RANGE_BOUNDS, Config, IMPACT_BOUNDS, SIZE_MIN_BOUNDS,
	SIZE_RANGE_BOUNDS, SPEED_BOUNDS,
};
use super::palette::{Color, PALETTE_LEN};

/// Formats a slider value with as many decimals as its step implies.
fn format_value(value: f64, step: f64) -> String {
	if step.fract() == 0.0 {
		format!("{:.0}", value)
	} else {
		format!("{:.1}", value)
	}
}

#[component]
fn Slider(
	label: &'static str,
	bounds: Bounds,
	#[prop(into)] value: Signal<f64>,
	on_input: Callback<f64>,
) -> impl IntoView {
	view! {
		<label class="starfield-field">
			<span class="starfield-label">{label}</span>
			<input
				type="range"
				min=bounds.min.to_string()
				max=bounds.max.to_string()
				step=bounds.step.to_string()
				prop:value=move || value.get().to_string()
				on:input=move |ev| {
					if let Ok(v) = event_target_value(&ev).parse::<f64>() {
						on_input.run(bounds.clamp(v));
					}
				}
			/>
			<span class="starfield-value">{move || format_value(value.get(), bounds.step)}</span>
		</label>
	}
}

#[component]
fn Toggle(
	label: &'static str,
	#[prop(into)] value: Signal<bool>,
	on_toggle: Callback<bool>,
) -> impl IntoView {
	view! {
		<label class="starfield-field">
			<span class="starfield-label">{label}</span>
			<input
				type="checkbox"
				prop:checked=move || value.get()
				on:change=move |ev| on_toggle.run(event_target_checked(&ev))
			/>
		</label>
	}
}

/// Collapsible settings panel bound to `config`.
#[component]
pub fn ControlPanel(config: RwSignal<Config>) -> impl IntoView {
	let field = move |read: fn(&Config) -> f64| Signal::derive(move || config.with(read));
	let flag = move |read: fn(&Config) -> bool| Signal::derive(move || config.with(read));

	let colors = (0..PALETTE_LEN)
		.map(|i| {
			view! {
				<input
					type="color"
					class="starfield-swatch"
					prop:value=move || config.with(|c| c.palette.get(i).to_css())
					on:input=move |ev| {
						if let Some(color) = Color::parse_hex(&event_target_value(&ev)) {
							config.update(|c| c.palette.set(i, color));
						}
					}
				/>
			}
		})
		.collect_view();

	view! {
		<aside class="starfield-panel">
			<Slider
				label="count"
				bounds=COUNT_BOUNDS
				value=field(|c| c.count as f64)
				on_input=Callback::new(move |v: f64| config.update(|c| c.count = v.round() as usize))
			/>
			<Slider
				label="speed"
				bounds=SPEED_BOUNDS
				value=field(|c| c.speed)
				on_input=Callback::new(move |v: f64| config.update(|c| c.speed = v))
			/>
			<details open>
				<summary>"size"</summary>
				<Slider
					label="min"
					bounds=SIZE_MIN_BOUNDS
					value=field(|c| c.size.min)
					on_input=Callback::new(move |v: f64| config.update(|c| c.size.min = v))
				/>
				<Slider
					label="range"
					bounds=SIZE_RANGE_BOUNDS
					value=field(|c| c.size.range)
					on_input=Callback::new(move |v: f64| config.update(|c| c.size.range = v))
				/>
			</details>
			<details open>
				<summary>"colors"</summary>
				<div class="starfield-swatches">{colors}</div>
			</details>
			<details>
				<summary>"cursor"</summary>
				<Toggle
					label="manual"
					value=flag(|c| c.cursor.manual)
					on_toggle=Callback::new(move |v: bool| config.update(|c| c.cursor.manual = v))
				/>
				<Slider
					label="x"
					bounds=CURSOR_POSITION_BOUNDS
					value=field(|c| c.cursor.x)
					on_input=Callback::new(move |v: f64| config.update(|c| c.cursor.x = v))
				/>
				<Slider
					label="y"
					bounds=CURSOR_POSITION_BOUNDS
					value=field(|c| c.cursor.y)
					on_input=Callback::new(move |v: f64| config.update(|c| c.cursor.y = v))
				/>
				<Slider
					label="radius"
					bounds=CURSOR_RADIUS_BOUNDS
					value=field(|c| c.cursor.radius)
					on_input=Callback::new(move |v: f64| config.update(|c| c.cursor.radius = v))
				/>
				<Slider
					label="range"
					bounds=CURSOR_RANGE_BOUNDS
					value=field(|c| c.cursor.range)
					on_input=Callback::new(move |v: f64| config.update(|c| c.cursor.range = v))
				/>
				<Slider
					label="impact"
					bounds=IMPACT_BOUNDS
					value=field(|c| c.cursor.impact)
					on_input=Callback::new(move |v: f64| config.update(|c| c.cursor.impact = v))
				/>
				<Slider
					label="click duration"
					bounds=CLICK_DURATION_BOUNDS
					value=field(|c| c.cursor.click_duration)
					on_input=Callback::new(move |v: f64| config.update(|c| c.cursor.click_duration = v))
				/>
				<Slider
					label="click size"
					bounds=CLICK_SIZE_BOUNDS
					value=field(|c| c.cursor.click_size)
					on_input=Callback::new(move |v: f64| config.update(|c| c.cursor.click_size = v))
				/>
			</details>
			<Toggle
				label="demo"
				value=flag(|c| c.demo)
				on_toggle=Callback::new(move |v: bool| config.update(|c| c.demo = v))
			/>
			<Toggle
				label="debug"
				value=flag(|c| c.debug)
				on_toggle=Callback::new(move |v: bool| config.update(|c| c.debug = v))
			/>
		</aside>
	}
}
