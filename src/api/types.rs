//! Payload shapes as served by the backend. Field names follow the wire format.

use serde::Deserialize;

/// A symbol record, as returned by search and used by the details panel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Symbol {
	pub id: i64,
	pub name: String,
	pub tradition: String,
	#[serde(default)]
	pub element: String,
	#[serde(default)]
	pub century_origin: Option<i64>,
	#[serde(default)]
	pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TimeSpan {
	pub earliest: i64,
	pub latest: i64,
	#[serde(default)]
	pub range_years: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TraditionCount {
	pub tradition: String,
	pub count: u32,
}

/// `/dashboard/summary`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DashboardSummary {
	pub total_symbols: u32,
	pub total_traditions: u32,
	pub time_span: TimeSpan,
	#[serde(default)]
	pub top_traditions: Vec<TraditionCount>,
}

/// One slice of `/element-distribution`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ElementShare {
	pub element: String,
	pub count: u32,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub symbols: Vec<String>,
	#[serde(default)]
	pub traditions: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NetworkNode {
	pub id: i64,
	pub name: String,
	pub tradition: String,
	#[serde(default)]
	pub element: String,
	#[serde(default)]
	pub color: Option<String>,
	/// Century of origin; negative is BCE.
	#[serde(default)]
	pub century: i64,
	#[serde(default)]
	pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NetworkLink {
	pub source: i64,
	pub target: i64,
	/// 0..1
	pub strength: f64,
	#[serde(default)]
	pub description: String,
}

/// `/network`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NetworkPayload {
	pub nodes: Vec<NetworkNode>,
	pub links: Vec<NetworkLink>,
}

/// One point of `/timeline`.
///
/// `year` and `century_origin` are distinct backend fields and are never
/// converted into each other.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TimelineEntry {
	#[serde(default)]
	pub id: i64,
	pub name: String,
	pub tradition: String,
	#[serde(default)]
	pub element: String,
	pub year: i64,
	#[serde(default)]
	pub year_display: Option<String>,
	#[serde(default)]
	pub century_origin: Option<i64>,
	#[serde(default)]
	pub description: Option<String>,
}

impl From<&TimelineEntry> for Symbol {
	fn from(entry: &TimelineEntry) -> Self {
		Symbol {
			id: entry.id,
			name: entry.name.clone(),
			tradition: entry.tradition.clone(),
			element: entry.element.clone(),
			century_origin: entry.century_origin,
			description: entry.description.clone(),
		}
	}
}

impl From<&NetworkNode> for Symbol {
	fn from(node: &NetworkNode) -> Self {
		Symbol {
			id: node.id,
			name: node.name.clone(),
			tradition: node.tradition.clone(),
			element: node.element.clone(),
			century_origin: Some(node.century),
			description: node.description.clone(),
		}
	}
}

/// Entry of `/symbols/{id}/connections`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConnectedSymbol {
	pub name: String,
	pub tradition: String,
}

/// One row of `/tradition-timeline`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TraditionSpan {
	pub name: String,
	pub start_year: i64,
	pub end_year: i64,
	#[serde(default)]
	pub region: String,
	#[serde(default)]
	pub major_texts: Vec<String>,
	#[serde(default)]
	pub key_figures: Vec<String>,
	#[serde(default)]
	pub core_concepts: Vec<String>,
}

/// One row of `/geographic-distribution`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegionCount {
	pub region: String,
	pub count: u32,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn symbol_tolerates_missing_optional_fields() {
		let symbol: Symbol =
			serde_json::from_str(r#"{"id":3,"name":"Ankh","tradition":"Egyptian"}"#).unwrap();
		assert_eq!(symbol.century_origin, None);
		assert_eq!(symbol.description, None);
		assert_eq!(symbol.element, "");
	}

	#[test]
	fn timeline_entry_keeps_year_and_century_apart() {
		let entry: TimelineEntry = serde_json::from_str(
			r#"{"id":1,"name":"Ouroboros","tradition":"Egyptian/Greek","element":"Water","year":-1650,"year_display":"1650 BCE"}"#,
		)
		.unwrap();
		let symbol = Symbol::from(&entry);
		assert_eq!(entry.year, -1650);
		assert_eq!(symbol.century_origin, None);
		assert_eq!(symbol.tradition, "Egyptian/Greek");
	}

	#[test]
	fn network_payload_reads_numeric_ids() {
		let payload: NetworkPayload = serde_json::from_str(
			r##"{"nodes":[{"id":1,"name":"Ankh","tradition":"Egyptian","element":"Air","color":"#ffd700","century":-30}],
			"links":[{"source":1,"target":2,"strength":0.8,"description":"shared motif"}]}"##,
		)
		.unwrap();
		assert_eq!(payload.nodes[0].color.as_deref(), Some("#ffd700"));
		assert_eq!(payload.links[0].target, 2);
		assert_eq!(Symbol::from(&payload.nodes[0]).century_origin, Some(-30));
	}
}
