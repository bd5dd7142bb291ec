use leptos::prelude::*;

use crate::api::{ApiConfig, RegionCount};
use crate::widget::{Load, Widget};

/// Sorted by count, largest first; ties keep the backend order.
pub fn ranked_regions(regions: &[RegionCount]) -> Vec<RegionCount> {
	let mut ranked = regions.to_vec();
	ranked.sort_by(|a, b| b.count.cmp(&a.count));
	ranked
}

/// Bar width in percent of the largest count.
pub fn bar_width(count: u32, max: u32) -> f64 {
	if max == 0 {
		0.0
	} else {
		f64::from(count) / f64::from(max) * 100.0
	}
}

#[component]
pub fn RegionChart() -> impl IntoView {
	let api = expect_context::<ApiConfig>();
	let regions = Widget::<Vec<RegionCount>>::new("geographic distribution");
	regions.dispatch(async move { api.geographic_distribution().await });

	move || match regions.load.get() {
		Load::Failed(err) => view! {
			<div class="alert alert-danger">"Error loading regional data: " {err}</div>
		}
		.into_any(),
		Load::Idle | Load::Loading => view! { <div class="chart-loading">"Loading..."</div> }.into_any(),
		Load::Populated(list) => {
			let ranked = ranked_regions(&list);
			let max = ranked.first().map(|r| r.count).unwrap_or(0);
			view! {
				<div id="regionChart" class="region-chart">
					{ranked
						.into_iter()
						.map(|region| {
							let style = format!("width: {:.1}%;", bar_width(region.count, max));
							view! {
								<div class="region-row">
									<span class="region-label">{region.region}</span>
									<div class="region-track">
										<div class="region-bar" style=style></div>
									</div>
									<span class="region-count">{region.count}</span>
								</div>
							}
						})
						.collect_view()}
				</div>
			}
			.into_any()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn region(name: &str, count: u32) -> RegionCount {
		RegionCount {
			region: name.into(),
			count,
		}
	}

	#[test]
	fn regions_rank_by_count() {
		let ranked = ranked_regions(&[
			region("Europe", 3),
			region("Africa", 5),
			region("Asia", 3),
		]);
		let names: Vec<_> = ranked.iter().map(|r| r.region.as_str()).collect();
		assert_eq!(names, ["Africa", "Europe", "Asia"]);
	}

	#[test]
	fn widths_are_relative_to_the_largest() {
		assert_eq!(bar_width(5, 5), 100.0);
		assert_eq!(bar_width(2, 8), 25.0);
		assert_eq!(bar_width(0, 0), 0.0);
	}
}
