use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::model::{MARGIN, POINT_RADIUS, TimelineLayout};
use crate::api::TimelineEntry;
use crate::format::format_year;

const TEXT_COLOR: &str = "#e0e0e0";
const GRID_COLOR: &str = "rgba(255, 255, 255, 0.1)";
const AXIS_COLOR: &str = "rgba(255, 255, 255, 0.2)";

pub fn render(layout: &TimelineLayout, hovered: Option<&TimelineEntry>, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (layout.width, layout.height);
	ctx.clear_rect(0.0, 0.0, w, h);
	draw_axis(layout, ctx);
	draw_points(layout, hovered, ctx);
	draw_legend(layout, ctx);
}

fn draw_axis(layout: &TimelineLayout, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (layout.width, layout.height);
	let bottom = h - MARGIN;

	ctx.set_line_width(1.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(4.0),
		&JsValue::from_f64(4.0),
	));
	ctx.set_stroke_style_str(GRID_COLOR);
	ctx.set_fill_style_str(TEXT_COLOR);
	ctx.set_font("11px Arial, sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	for year in layout.ticks() {
		let x = layout.x_for(year);
		ctx.begin_path();
		ctx.move_to(x, MARGIN);
		ctx.line_to(x, bottom);
		ctx.stroke();
		let _ = ctx.fill_text(&format_year(year), x, bottom + 6.0);
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	// zero line marks the BCE/CE boundary
	if layout.year_min < 0 && layout.year_max > 0 {
		let x = layout.x_for(0);
		ctx.set_stroke_style_str(AXIS_COLOR);
		ctx.begin_path();
		ctx.move_to(x, MARGIN);
		ctx.line_to(x, bottom);
		ctx.stroke();
	}

	ctx.set_stroke_style_str(AXIS_COLOR);
	ctx.begin_path();
	ctx.move_to(MARGIN, bottom);
	ctx.line_to(w - MARGIN, bottom);
	ctx.stroke();

	ctx.set_text_baseline("middle");
	ctx.set_font("18px Arial, sans-serif");
	let _ = ctx.fill_text("Symbol Timeline", w / 2.0, MARGIN / 2.0);
}

fn draw_points(layout: &TimelineLayout, hovered: Option<&TimelineEntry>, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("10px Arial, sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("bottom");

	for (row, entry, x, y) in layout.points() {
		let is_hovered = hovered == Some(entry);
		let radius = if is_hovered {
			POINT_RADIUS * 1.4
		} else {
			POINT_RADIUS
		};

		ctx.set_global_alpha(0.8);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(row.color());
		ctx.fill();
		ctx.set_global_alpha(1.0);

		if is_hovered {
			ctx.set_stroke_style_str("white");
			ctx.set_line_width(1.5);
			ctx.stroke();
		}

		ctx.set_fill_style_str(TEXT_COLOR);
		let _ = ctx.fill_text(&entry.name, x, y - radius - 2.0);
	}
}

fn draw_legend(layout: &TimelineLayout, ctx: &CanvasRenderingContext2d) {
	if layout.rows.is_empty() {
		return;
	}
	let line_h = 14.0;
	let (x, y) = (MARGIN + 4.0, MARGIN + 4.0);
	let width = layout
		.rows
		.iter()
		.map(|r| r.tradition.len() as f64 * 6.0)
		.fold(0.0, f64::max)
		+ 24.0;

	ctx.set_fill_style_str("rgba(0, 0, 0, 0.5)");
	ctx.fill_rect(x, y, width, line_h * layout.rows.len() as f64 + 6.0);
	ctx.set_stroke_style_str(AXIS_COLOR);
	ctx.stroke_rect(x, y, width, line_h * layout.rows.len() as f64 + 6.0);

	ctx.set_font("10px Arial, sans-serif");
	ctx.set_text_align("left");
	ctx.set_text_baseline("middle");
	for (i, row) in layout.rows.iter().enumerate() {
		let cy = y + 3.0 + line_h * (i as f64 + 0.5);
		ctx.begin_path();
		let _ = ctx.arc(x + 8.0, cy, 4.0, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(row.color());
		ctx.fill();
		ctx.set_fill_style_str(TEXT_COLOR);
		let _ = ctx.fill_text(&row.tradition, x + 16.0, cy);
	}
}
