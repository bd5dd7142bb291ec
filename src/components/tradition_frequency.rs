use leptos::prelude::*;

use crate::api::{ApiConfig, TraditionCount};
use crate::widget::{Load, Widget};

/// Faintest cell opacity, so the least frequent tradition stays visible.
const MIN_OPACITY: f64 = 0.15;

#[derive(Clone, Debug, PartialEq)]
pub struct HeatCell {
	pub tradition: String,
	pub count: u32,
	/// 0..1, relative to the most frequent tradition.
	pub intensity: f64,
}

impl HeatCell {
	pub fn fill(&self) -> String {
		let opacity = MIN_OPACITY + (1.0 - MIN_OPACITY) * self.intensity;
		format!("rgba(170, 93, 249, {:.2})", opacity)
	}
}

/// Largest count first; ties keep the backend order.
pub fn heat_cells(counts: &[TraditionCount]) -> Vec<HeatCell> {
	let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
	let mut cells: Vec<HeatCell> = counts
		.iter()
		.map(|c| HeatCell {
			tradition: c.tradition.clone(),
			count: c.count,
			intensity: if max == 0 {
				0.0
			} else {
				f64::from(c.count) / f64::from(max)
			},
		})
		.collect();
	cells.sort_by(|a, b| b.count.cmp(&a.count));
	cells
}

/// Symbols per tradition as a heat grid.
#[component]
pub fn TraditionFrequency() -> impl IntoView {
	let api = expect_context::<ApiConfig>();
	let frequency = Widget::<Vec<TraditionCount>>::new("tradition frequency");
	frequency.dispatch(async move { api.tradition_frequency().await });

	move || match frequency.load.get() {
		Load::Failed(err) => view! {
			<div class="alert alert-danger">"Error loading tradition frequency: " {err}</div>
		}
		.into_any(),
		Load::Idle | Load::Loading => view! { <div class="chart-loading">"Loading..."</div> }.into_any(),
		Load::Populated(counts) => view! {
			<div id="traditionHeatmap" class="tradition-heatmap">
				{heat_cells(&counts)
					.into_iter()
					.map(|cell| {
						let style = format!("background-color: {};", cell.fill());
						let title = format!("{}: {} symbols", cell.tradition, cell.count);
						view! {
							<div class="heat-cell" style=style title=title>
								<span class="heat-label">{cell.tradition}</span>
								<span class="heat-count">{cell.count}</span>
							</div>
						}
					})
					.collect_view()}
			</div>
		}
		.into_any(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn count(tradition: &str, count: u32) -> TraditionCount {
		TraditionCount {
			tradition: tradition.into(),
			count,
		}
	}

	#[test]
	fn cells_rank_by_count() {
		let cells = heat_cells(&[count("Greek", 4), count("Egyptian", 9), count("Norse", 4)]);
		let names: Vec<_> = cells.iter().map(|c| c.tradition.as_str()).collect();
		assert_eq!(names, ["Egyptian", "Greek", "Norse"]);
	}

	#[test]
	fn intensity_is_relative_to_the_most_frequent() {
		let cells = heat_cells(&[count("Celtic", 2), count("Hindu", 8)]);
		assert_eq!(cells[0].intensity, 1.0);
		assert_eq!(cells[1].intensity, 0.25);
		assert_eq!(cells[0].fill(), "rgba(170, 93, 249, 1.00)");
	}

	#[test]
	fn zero_counts_stay_faint() {
		let cells = heat_cells(&[count("Aztec", 0)]);
		assert_eq!(cells[0].intensity, 0.0);
		assert_eq!(cells[0].fill(), "rgba(170, 93, 249, 0.15)");
	}
}
