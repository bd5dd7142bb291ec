use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::model::{DonutLayout, HOLE_RATIO, format_percent, geometry};

const SLICE_BORDER: &str = "#1e1e1e";
const TEXT_COLOR: &str = "#e0e0e0";

pub fn render(
	layout: &DonutLayout,
	hovered: Option<usize>,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) {
	ctx.clear_rect(0.0, 0.0, width, height);
	let (cx, cy, outer) = geometry(width, height);
	if outer <= 0.0 {
		return;
	}
	let inner = outer * HOLE_RATIO;

	for (i, slice) in layout.slices.iter().enumerate() {
		if slice.end <= slice.start {
			continue;
		}
		// hovered slice pops out a little
		let (ox, oy) = if hovered == Some(i) {
			let mid = slice.mid_angle();
			(mid.cos() * 6.0, mid.sin() * 6.0)
		} else {
			(0.0, 0.0)
		};

		ctx.begin_path();
		let _ = ctx.arc(cx + ox, cy + oy, outer, slice.start, slice.end);
		let _ = ctx.arc_with_anticlockwise(cx + ox, cy + oy, inner, slice.end, slice.start, true);
		ctx.close_path();
		ctx.set_fill_style_str(slice.fill());
		ctx.fill();
		ctx.set_stroke_style_str(SLICE_BORDER);
		ctx.set_line_width(2.0);
		ctx.stroke();
	}

	ctx.set_fill_style_str(TEXT_COLOR);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_font("11px Arial, sans-serif");
	let label_r = (outer + inner) / 2.0;
	for (i, slice) in layout.slices.iter().enumerate() {
		// skip slivers too thin to hold text
		if slice.end - slice.start < 0.25 {
			continue;
		}
		let mid = slice.mid_angle();
		let (x, y) = (cx + mid.cos() * label_r, cy + mid.sin() * label_r);
		let _ = ctx.fill_text(&slice.label, x, y - 6.0);
		let _ = ctx.fill_text(&format_percent(layout.percent(i)), x, y + 7.0);
	}

	ctx.set_font("16px Arial, sans-serif");
	let _ = ctx.fill_text("Elements", cx, cy);

	if layout.slices.is_empty() {
		ctx.begin_path();
		let _ = ctx.arc(cx, cy, outer, 0.0, TAU);
		ctx.set_stroke_style_str(SLICE_BORDER);
		ctx.stroke();
	}
}
