use leptos::prelude::*;

use crate::api::{ApiConfig, DashboardSummary, TimeSpan, TraditionCount};
use crate::format::format_time_span;
use crate::widget::Widget;

const PLACEHOLDER: &str = "-";

pub fn badge_text(tradition: &TraditionCount) -> String {
	format!("{} ({})", tradition.tradition, tradition.count)
}

/// Length of the span in years, preferring the backend's own figure.
pub fn range_text(span: &TimeSpan) -> String {
	let years = span
		.range_years
		.unwrap_or_else(|| span.latest.saturating_sub(span.earliest));
	format!("{} years", years)
}

/// Header counters. Failures are logged and the placeholders stay in place.
#[component]
pub fn SummaryLoader() -> impl IntoView {
	let api = expect_context::<ApiConfig>();
	let summary = Widget::<DashboardSummary>::new("dashboard summary");
	summary.dispatch(async move { api.dashboard_summary().await });

	let field = move |f: fn(&DashboardSummary) -> String| {
		move || {
			summary
				.load
				.with(|load| load.populated().map(f))
				.unwrap_or_else(|| PLACEHOLDER.to_string())
		}
	};

	view! {
		<div class="dashboard-summary">
			<div class="summary-stat">
				<span class="summary-label">"Symbols"</span>
				<span id="totalSymbols" class="summary-value">
					{field(|s| s.total_symbols.to_string())}
				</span>
			</div>
			<div class="summary-stat">
				<span class="summary-label">"Traditions"</span>
				<span id="totalTraditions" class="summary-value">
					{field(|s| s.total_traditions.to_string())}
				</span>
			</div>
			<div class="summary-stat">
				<span class="summary-label">"Time span"</span>
				<span id="timeSpan" class="summary-value">
					{field(|s| format_time_span(s.time_span.earliest, s.time_span.latest))}
				</span>
				<span class="summary-label text-muted">
					{move || summary.load.with(|load| load.populated().map(|s| range_text(&s.time_span)))}
				</span>
			</div>
			<div id="topTraditions" class="summary-traditions">
				{move || {
					summary
						.load
						.with(|load| {
							load.populated().map(|s| s.top_traditions.clone()).unwrap_or_default()
						})
						.iter()
						.map(|t| view! { <span class="badge bg-secondary me-1">{badge_text(t)}</span> })
						.collect_view()
				}}
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn badges_show_tradition_and_count() {
		let t = TraditionCount {
			tradition: "Egyptian".into(),
			count: 14,
		};
		assert_eq!(badge_text(&t), "Egyptian (14)");
	}

	#[test]
	fn range_prefers_backend_figure() {
		let mut span = TimeSpan {
			earliest: -3000,
			latest: 1200,
			range_years: Some(4199),
		};
		assert_eq!(range_text(&span), "4199 years");
		span.range_years = None;
		assert_eq!(range_text(&span), "4200 years");
	}
}
