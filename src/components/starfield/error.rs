//! Startup failures.

use thiserror::Error;

/// The drawing surface could not be acquired. Nothing can render without
/// it, so the component logs this and never starts its frame loop.
#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("no global window")]
	NoWindow,
	#[error("canvas context lookup failed: {0}")]
	ContextLookup(String),
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("2d context is not a CanvasRenderingContext2d")]
	WrongContextType,
}
