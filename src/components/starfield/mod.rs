//! Drifting starfield component.
//!
//! Renders an animated field of colored points on an HTML canvas with:
//! - A reusable star pool that never shrinks
//! - Speed changes that keep the animation continuous
//! - One filled path per palette color per frame
//! - A cursor push effect with click pulses and an auto-demo path
//! - A live control panel for every tunable
//!
//! # Example
//!
//! ```ignore
//! use starfield::{Config, ControlPanel, StarfieldCanvas};
//!
//! let config = RwSignal::new(Config::default());
//!
//! view! {
//!     <StarfieldCanvas config=config />
//!     <ControlPanel config=config />
//! }
//! ```

mod component;
pub mod config;
pub mod cursor;
mod error;
pub mod input;
pub mod palette;
mod panel;
pub mod pool;
pub mod render;
pub mod state;

pub use component::StarfieldCanvas;
pub use config::Config;
pub use error::SurfaceError;
pub use palette::{Color, Palette};
pub use panel::ControlPanel;
pub use state::RenderState;
