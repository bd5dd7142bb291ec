use force_graph::DefaultNodeIdx;

use crate::api::NetworkNode;

/// Payload carried by each integrator node.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub symbol: NetworkNode,
	pub color: String,
	pub radius: f64,
}

/// A link with its endpoints resolved to integrator indices once, at build
/// time, so its identity never changes while the layout runs.
#[derive(Clone, Debug)]
pub struct LinkInfo {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub strength: f64,
	pub description: String,
}

impl LinkInfo {
	pub fn touches(&self, idx: DefaultNodeIdx) -> bool {
		self.source == idx || self.target == idx
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTarget {
	Node(DefaultNodeIdx),
	/// Index into the link list.
	Link(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkEmphasis {
	Normal,
	Highlighted,
	Dimmed,
}
