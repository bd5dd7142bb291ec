use leptos::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::model::TimelineLayout;
use super::render;
use crate::api::{ApiConfig, Symbol, TimelineEntry};
use crate::components::canvas::{context_2d, fit_to_parent, pointer_position};
use crate::components::symbol_details::use_symbol_details;
use crate::components::tooltip::{Tooltip, TooltipContent, TooltipOverlay};
use crate::format::format_year;
use crate::widget::{Load, Widget};

const DEFAULT_WIDTH: f64 = 800.0;
const HEIGHT: f64 = 420.0;

/// Scatter of dated symbols, one row per primary tradition.
#[component]
pub fn SymbolTimeline() -> impl IntoView {
	let api = expect_context::<ApiConfig>();
	let details = use_symbol_details();
	let timeline = Widget::<Vec<TimelineEntry>>::new("symbol timeline");
	log::info!("initializing symbol timeline");
	timeline.dispatch(async move { api.timeline().await });

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let size = RwSignal::new((DEFAULT_WIDTH, HEIGHT));
	let hovered = RwSignal::new(None::<TimelineEntry>);
	let tooltip = Tooltip::default();

	let layout = Memo::new(move |_| {
		let (w, h) = size.get();
		timeline
			.load
			.with(|load| load.populated().map(|data| TimelineLayout::new(data, w, h)))
			.unwrap_or_default()
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if !timeline.load.with(|load| load.populated().is_some()) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let fitted = fit_to_parent(&canvas, DEFAULT_WIDTH, HEIGHT);
		if fitted != size.get() {
			// layout re-runs and so does this effect
			size.set(fitted);
			return;
		}
		let Some(ctx) = context_2d(&canvas) else {
			log::error!("symbol timeline: 2d context unavailable");
			return;
		};
		let hovered = hovered.get();
		layout.with(|layout| render::render(layout, hovered.as_ref(), &ctx));
	});

	let entry_under_pointer = move |ev: &MouseEvent| -> Option<(String, TimelineEntry)> {
		let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
		let (x, y) = pointer_position(&canvas, ev);
		layout.with_untracked(|layout| {
			layout
				.point_at(x, y)
				.map(|(row, entry)| (row.tradition.clone(), entry.clone()))
		})
	};

	let on_mousemove = move |ev: MouseEvent| {
		let hit = entry_under_pointer(&ev);
		let entry = hit.as_ref().map(|(_, entry)| entry.clone());
		if hovered.with_untracked(|h| *h != entry) {
			hovered.set(entry);
		}
		match hit {
			Some((tradition, entry)) => tooltip.show(
				TooltipContent {
					title: entry.name,
					lines: vec![
						format!(
							"Year: {}",
							entry.year_display.unwrap_or_else(|| format_year(entry.year))
						),
						format!("Tradition: {}", tradition),
					],
					note: None,
				},
				ev.client_x() as f64,
				ev.client_y() as f64,
			),
			None => tooltip.hide(),
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		hovered.set(None);
		tooltip.hide();
	};

	let on_click = move |ev: MouseEvent| {
		if let Some((_, entry)) = entry_under_pointer(&ev) {
			details.show(Symbol::from(&entry));
		}
	};

	let failure = move || match timeline.load.get() {
		Load::Failed(err) => Some(view! {
			<div class="alert alert-danger">"Error loading timeline data: " {err}</div>
		}),
		_ => None,
	};
	let failed = move || timeline.load.with(|load| matches!(load, Load::Failed(_)));

	view! {
		<div id="timelineChart" class="chart-container">
			{failure}
			<div class="chart-canvas" style:display=move || if failed() { "none" } else { "block" }>
				{move || {
					timeline
						.load
						.with(Load::is_loading)
						.then(|| view! { <div class="chart-loading">"Loading..."</div> })
				}}
				<canvas
					node_ref=canvas_ref
					class="timeline-canvas"
					on:mousemove=on_mousemove
					on:mouseleave=on_mouseleave
					on:click=on_click
					style="display: block;"
				/>
			</div>
			<TooltipOverlay tooltip=tooltip />
		</div>
	}
}
