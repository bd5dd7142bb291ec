//! Small helpers shared by the canvas-backed charts.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()?
		.dyn_into::<CanvasRenderingContext2d>()
		.ok()
}

/// Sizes the canvas backing store to its parent's width and a fixed height.
/// Falls back to `fallback_w` when the parent has not been laid out yet.
pub fn fit_to_parent(canvas: &HtmlCanvasElement, fallback_w: f64, height: f64) -> (f64, f64) {
	let w = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(fallback_w);
	if canvas.width() != w as u32 {
		canvas.set_width(w as u32);
	}
	if canvas.height() != height as u32 {
		canvas.set_height(height as u32);
	}
	(w, height)
}

/// Pointer position relative to the canvas' top-left corner.
pub fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}
