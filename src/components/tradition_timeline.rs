use leptos::prelude::*;

use crate::api::{ApiConfig, TraditionSpan};
use crate::format::format_time_span;
use crate::widget::{Load, Widget};

/// Placement of one bar along the shared axis, in percent of the track width.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanBar {
	pub span: TraditionSpan,
	pub left: f64,
	pub width: f64,
}

impl SpanBar {
	pub fn label(&self) -> String {
		format!(
			"{} ({})",
			self.span.name,
			format_time_span(self.span.start_year, self.span.end_year)
		)
	}
}

/// Sorts by start year and maps every span onto `[0, 100]`.
pub fn span_bars(spans: &[TraditionSpan]) -> Vec<SpanBar> {
	let mut sorted = spans.to_vec();
	sorted.sort_by_key(|s| s.start_year);

	let min = sorted.iter().map(|s| s.start_year.min(s.end_year)).min();
	let max = sorted.iter().map(|s| s.start_year.max(s.end_year)).max();
	let (Some(min), Some(max)) = (min, max) else {
		return Vec::new();
	};
	let range = (max - min).max(1) as f64;

	sorted
		.into_iter()
		.map(|span| {
			let (lo, hi) = if span.start_year <= span.end_year {
				(span.start_year, span.end_year)
			} else {
				(span.end_year, span.start_year)
			};
			SpanBar {
				left: (lo - min) as f64 / range * 100.0,
				width: (hi - lo) as f64 / range * 100.0,
				span,
			}
		})
		.collect()
}

fn detail_list(title: &'static str, items: Vec<String>) -> impl IntoView {
	(!items.is_empty()).then(|| {
		view! {
			<p><strong>{title}</strong>{items.join(", ")}</p>
		}
	})
}

/// Lifespans of the traditions on a shared year axis.
#[component]
pub fn TraditionTimeline() -> impl IntoView {
	let api = expect_context::<ApiConfig>();
	let spans = Widget::<Vec<TraditionSpan>>::new("tradition timeline");
	spans.dispatch(async move { api.tradition_timeline().await });

	let selected = RwSignal::new(None::<TraditionSpan>);
	let bars = Memo::new(move |_| {
		spans
			.load
			.with(|load| load.populated().map(|s| span_bars(s)))
			.unwrap_or_default()
	});

	let body = move || match spans.load.get() {
		Load::Failed(err) => view! {
			<div class="alert alert-danger">"Error loading tradition timeline: " {err}</div>
		}
		.into_any(),
		Load::Idle | Load::Loading => view! { <div class="chart-loading">"Loading..."</div> }.into_any(),
		Load::Populated(_) => bars
			.get()
			.into_iter()
			.map(|bar| {
				let label = bar.label();
				let style = format!("left: {:.2}%; width: {:.2}%;", bar.left, bar.width.max(0.5));
				let span = bar.span;
				view! {
					<div class="tradition-row">
						<span class="tradition-label">{label}</span>
						<div class="tradition-track">
							<div
								class="tradition-bar"
								style=style
								on:click=move |_| selected.set(Some(span.clone()))
							></div>
						</div>
					</div>
				}
			})
			.collect_view()
			.into_any(),
	};

	view! {
		<div id="traditionTimeline" class="tradition-timeline">
			{body}
			{move || {
				selected
					.get()
					.map(|span| {
						view! {
							<div id="traditionDetails" class="tradition-details">
								<h5>{span.name}</h5>
								<p><strong>"Region: "</strong>{span.region}</p>
								{detail_list("Major texts: ", span.major_texts)}
								{detail_list("Key figures: ", span.key_figures)}
								{detail_list("Core concepts: ", span.core_concepts)}
							</div>
						}
					})
			}}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn span(name: &str, start_year: i64, end_year: i64) -> TraditionSpan {
		TraditionSpan {
			name: name.into(),
			start_year,
			end_year,
			region: String::new(),
			major_texts: Vec::new(),
			key_figures: Vec::new(),
			core_concepts: Vec::new(),
		}
	}

	#[test]
	fn bars_are_sorted_and_scaled() {
		let bars = span_bars(&[span("Norse", 200, 1100), span("Egyptian", -3100, -30)]);
		assert_eq!(bars[0].span.name, "Egyptian");
		assert_eq!(bars[0].left, 0.0);
		let norse = &bars[1];
		assert!((norse.left + norse.width - 100.0).abs() < 1e-9);
		assert!((norse.width - 900.0 / 4200.0 * 100.0).abs() < 1e-9);
	}

	#[test]
	fn reversed_span_is_normalised() {
		let bars = span_bars(&[span("A", 0, 100), span("B", 100, 50)]);
		assert_eq!(bars[1].left, 50.0);
		assert_eq!(bars[1].width, 50.0);
	}

	#[test]
	fn empty_input_has_no_bars() {
		assert!(span_bars(&[]).is_empty());
	}

	#[test]
	fn label_uses_era_years() {
		let bars = span_bars(&[span("Egyptian", -3100, -30)]);
		assert_eq!(bars[0].label(), "Egyptian (3100 BCE to 30 BCE)");
	}
}
