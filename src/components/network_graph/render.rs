use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, link_width};
use super::types::{HoverTarget, LinkEmphasis};

const BACKGROUND: &str = "#121212";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	draw_labels(state, ctx);
	ctx.restore();
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let positions = state.positions();
	let t = ease_out_cubic(state.hover.highlight_t);
	let k = state.transform.k;

	for (i, link) in state.links.iter().enumerate() {
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&link.source), positions.get(&link.target))
		else {
			continue;
		};

		// t=0: every link at 0.5, t=1: incident links at 0.9, the rest at 0.1
		let base = link_width(link.strength).max(0.5 / k);
		let emphasis = state.link_emphasis(i);
		let (alpha, width) = match emphasis {
			LinkEmphasis::Normal => (0.5, base),
			LinkEmphasis::Highlighted => (0.5 + 0.4 * t, base * (1.0 + 0.5 * t)),
			LinkEmphasis::Dimmed => (0.5 - 0.4 * t, base),
		};
		let alpha = if state.hover.target == Some(HoverTarget::Link(i)) {
			0.9
		} else {
			alpha
		};

		if emphasis == LinkEmphasis::Dimmed {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(4.0 / k),
				&JsValue::from_f64(4.0 / k),
			));
		}
		ctx.set_stroke_style_str(&format!("rgba(170, 93, 249, {})", alpha));
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	let has_highlight = state.hovered_node().is_some();
	let k = state.transform.k;

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let highlighted = has_highlight && state.is_highlighted(idx);
		let is_hovered = state.hovered_node() == Some(idx);

		let alpha = if has_highlight && !highlighted {
			1.0 - 0.6 * t
		} else {
			1.0
		};
		let radius = if is_hovered {
			info.radius * (1.0 + 0.25 * t)
		} else {
			info.radius
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();
		ctx.set_global_alpha(1.0);

		if highlighted {
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.4 + 0.5 * t));
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}
	});
}

fn draw_labels(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("white");
	ctx.set_font("10px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_global_alpha(0.7);
	state.graph.visit_nodes(|node| {
		let _ = ctx.fill_text(
			&node.data.user_data.symbol.name,
			node.x() as f64,
			node.y() as f64 + 20.0,
		);
	});
	ctx.set_global_alpha(1.0);
}
