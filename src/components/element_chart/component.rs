use leptos::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::model::{DonutLayout, find_element, format_percent, geometry, traditions_text};
use super::render;
use crate::api::{ApiConfig, ElementShare};
use crate::components::canvas::{context_2d, fit_to_parent, pointer_position};
use crate::components::tooltip::{Tooltip, TooltipContent, TooltipOverlay};
use crate::widget::{Load, Widget};

const DEFAULT_WIDTH: f64 = 400.0;
const DEFAULT_HEIGHT: f64 = 360.0;

/// Element distribution donut with a click-to-inspect details panel.
#[component]
pub fn ElementChart() -> impl IntoView {
	let api = expect_context::<ApiConfig>();
	let elements = Widget::<Vec<ElementShare>>::new("element chart");
	log::info!("initializing element chart");
	elements.dispatch(async move { api.element_distribution().await });

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let layout = Memo::new(move |_| {
		elements
			.load
			.with(|load| load.populated().map(|data| DonutLayout::new(data)))
			.unwrap_or_default()
	});
	let hovered = RwSignal::new(None::<usize>);
	let selected = RwSignal::new(None::<String>);
	let size = RwSignal::new((DEFAULT_WIDTH, DEFAULT_HEIGHT));
	let tooltip = Tooltip::default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if !elements.load.with(|load| load.populated().is_some()) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = fit_to_parent(&canvas, DEFAULT_WIDTH, DEFAULT_HEIGHT);
		size.set((w, h));
		let Some(ctx) = context_2d(&canvas) else {
			log::error!("element chart: 2d context unavailable");
			return;
		};
		layout.with(|layout| render::render(layout, hovered.get(), &ctx, w, h));
	});

	let slice_under_pointer = move |ev: &MouseEvent| -> Option<usize> {
		let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
		let (x, y) = pointer_position(&canvas, ev);
		let (w, h) = size.get_untracked();
		let (cx, cy, outer) = geometry(w, h);
		layout.with_untracked(|layout| layout.slice_at(x - cx, y - cy, outer))
	};

	let on_mousemove = move |ev: MouseEvent| {
		let hit = slice_under_pointer(&ev);
		if hovered.get_untracked() != hit {
			hovered.set(hit);
		}
		match hit {
			Some(idx) => {
				let content = layout.with_untracked(|layout| {
					let slice = &layout.slices[idx];
					TooltipContent {
						title: slice.label.clone(),
						lines: vec![
							format!("Count: {}", slice.count),
							format_percent(layout.percent(idx)),
						],
						note: None,
					}
				});
				tooltip.show(content, ev.client_x() as f64, ev.client_y() as f64);
			}
			None => tooltip.hide(),
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		hovered.set(None);
		tooltip.hide();
	};

	let on_click = move |ev: MouseEvent| {
		let Some(idx) = slice_under_pointer(&ev) else {
			return;
		};
		let label = layout.with_untracked(|layout| layout.slices[idx].label.clone());
		log::debug!("element chart: selected {}", label);
		selected.set(Some(label));
	};

	let details = move || {
		let label = selected.get()?;
		let count = layout.with(|layout| {
			layout
				.slices
				.iter()
				.find(|s| s.label == label)
				.map(|s| s.count)
				.unwrap_or_default()
		});
		let entry = elements
			.load
			.with(|load| load.populated().and_then(|data| find_element(data, &label).cloned()));
		let description = entry.as_ref().and_then(|e| e.description.clone());
		let traditions = entry.as_ref().and_then(traditions_text);
		let symbols = entry.map(|e| e.symbols).unwrap_or_default();

		Some(view! {
			<h4>{label}</h4>
			<p><strong>"Symbol count: "</strong>{count}</p>
			{description.map(|text| view! { <p>{text}</p> })}
			{traditions.map(|text| view! { <p><strong>"Traditions: "</strong>{text}</p> })}
			{(!symbols.is_empty())
				.then(|| {
					view! {
						<h5>"Associated Symbols"</h5>
						<ul>
							{symbols
								.into_iter()
								.map(|symbol| view! { <li>{symbol}</li> })
								.collect_view()}
						</ul>
					}
				})}
		})
	};

	let failure = move || match elements.load.get() {
		Load::Failed(err) => Some(view! {
			<div class="alert alert-danger">"Error loading element data: " {err}</div>
		}),
		_ => None,
	};
	let failed = move || elements.load.with(|load| matches!(load, Load::Failed(_)));

	view! {
		<div id="elementPieChart" class="chart-container">
			{failure}
			<div class="chart-canvas" style:display=move || if failed() { "none" } else { "block" }>
				{move || {
					elements
						.load
						.with(Load::is_loading)
						.then(|| view! { <div class="chart-loading">"Loading..."</div> })
				}}
				<canvas
					node_ref=canvas_ref
					class="element-chart-canvas"
					on:mousemove=on_mousemove
					on:mouseleave=on_mouseleave
					on:click=on_click
					style="display: block; cursor: pointer;"
				/>
			</div>
			<TooltipOverlay tooltip=tooltip />
		</div>
		<div
			id="elementDetails"
			class=move || {
				if selected.with(Option::is_some) { "element-details" } else { "element-details d-none" }
			}
		>
			{details}
		</div>
	}
}
