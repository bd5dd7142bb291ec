use leptos::prelude::*;

use super::state::node_color;
use crate::api::NetworkNode;
use crate::format::primary_tradition;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	pub tradition: String,
	pub color: String,
}

/// One entry per primary tradition, coloured after the first node seen in
/// that group. Two groups sharing a colour look the same here.
pub fn legend_entries(nodes: &[NetworkNode]) -> Vec<LegendEntry> {
	let mut entries: Vec<LegendEntry> = Vec::new();
	for node in nodes {
		let tradition = primary_tradition(&node.tradition);
		if entries.iter().any(|e| e.tradition == tradition) {
			continue;
		}
		entries.push(LegendEntry {
			tradition: tradition.to_string(),
			color: node_color(node),
		});
	}
	entries
}

#[component]
pub fn GraphLegend(#[prop(into)] entries: Signal<Vec<LegendEntry>>) -> impl IntoView {
	view! {
		<div class=move || {
			if entries.with(Vec::is_empty) { "network-legend d-none" } else { "network-legend" }
		}>
			<For
				each=move || entries.get()
				key=|entry| entry.tradition.clone()
				children=|entry| {
					view! {
						<div class="legend-item">
							<span
								class="legend-swatch"
								style=format!("background-color: {};", entry.color)
							></span>
							<span>{entry.tradition}</span>
						</div>
					}
				}
			/>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: i64, tradition: &str, color: Option<&str>) -> NetworkNode {
		NetworkNode {
			id,
			name: format!("n{id}"),
			tradition: tradition.into(),
			color: color.map(Into::into),
			..Default::default()
		}
	}

	#[test]
	fn one_entry_per_primary_tradition() {
		let entries = legend_entries(&[
			node(1, "Norse/Germanic", Some("#112233")),
			node(2, "Egyptian", Some("#ffd700")),
			node(3, "Norse/Slavic", Some("#445566")),
		]);
		assert_eq!(
			entries,
			vec![
				LegendEntry {
					tradition: "Norse".into(),
					color: "#112233".into()
				},
				LegendEntry {
					tradition: "Egyptian".into(),
					color: "#ffd700".into()
				},
			]
		);
	}

	#[test]
	fn missing_color_falls_back() {
		let entries = legend_entries(&[node(1, "Hermetic", None)]);
		assert_eq!(entries[0].color, "#8a2be2");
	}
}
