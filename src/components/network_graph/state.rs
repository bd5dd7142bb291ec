use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::simulation::{Body, Simulation, Spring, apply_forces};
use super::types::{HoverTarget, LinkEmphasis, LinkInfo, NodeInfo};
use crate::api::{NetworkNode, NetworkPayload};
use crate::components::tooltip::TooltipContent;
use crate::format::format_century_origin;

pub const BASE_RADIUS: f64 = 8.0;
pub const DEFAULT_NODE_COLOR: &str = "#8a2be2";
/// Minimum pick distance for links, in world units.
pub const LINK_HIT_DISTANCE: f64 = 4.0;
/// Pointer travel (screen px) below which a press/release counts as a click.
pub const CLICK_TOLERANCE: f64 = 3.0;
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 4.0;

pub fn node_radius(degree: usize) -> f64 {
	BASE_RADIUS + degree as f64 / 2.0
}

pub fn node_color(node: &NetworkNode) -> String {
	node.color
		.clone()
		.unwrap_or_else(|| DEFAULT_NODE_COLOR.to_string())
}

pub fn link_width(strength: f64) -> f64 {
	strength * 3.0
}

pub fn node_tooltip(node: &NetworkNode) -> TooltipContent {
	TooltipContent {
		title: node.name.clone(),
		lines: vec![
			format!("Tradition: {}", node.tradition),
			format!("Element: {}", node.element),
			format!("Origin: ~{}", format_century_origin(node.century)),
		],
		note: node.description.clone(),
	}
}

pub fn link_tooltip(source: &str, target: &str, link: &LinkInfo) -> TooltipContent {
	TooltipContent {
		title: format!("{} → {}", source, target),
		lines: vec![
			link.description.clone(),
			format!("Strength: {:.1}", link.strength),
		],
		note: None,
	}
}

/// Distance from `p` to the segment `a..b`.
pub fn distance_to_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
	let (dx, dy) = (b.0 - a.0, b.1 - a.1);
	let len_sq = dx * dx + dy * dy;
	let t = if len_sq < 1e-12 {
		0.0
	} else {
		(((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
	};
	(p.0 - (a.0 + t * dx)).hypot(p.1 - (a.1 + t * dy))
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub target: Option<HoverTarget>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	/// 0..1 fade of the highlight, eased toward 1 while a node is hovered.
	pub highlight_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub links: Vec<LinkInfo>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub simulation: Simulation,
	pub width: f64,
	pub height: f64,
}

impl ForceGraphState {
	pub fn new(data: &NetworkPayload, width: f64, height: f64) -> Self {
		// springs come from `simulation`, the integrator only repels
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 200.0,
			force_spring: 0.0,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		let known: HashSet<i64> = data.nodes.iter().map(|n| n.id).collect();
		let mut degree: HashMap<i64, usize> = HashMap::new();
		for link in &data.links {
			if !(known.contains(&link.source) && known.contains(&link.target)) {
				continue;
			}
			*degree.entry(link.source).or_default() += 1;
			if link.target != link.source {
				*degree.entry(link.target).or_default() += 1;
			}
		}

		let mut id_to_idx = HashMap::new();
		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					symbol: node.clone(),
					color: node_color(node),
					radius: node_radius(degree.get(&node.id).copied().unwrap_or(0)),
				},
			});
			id_to_idx.insert(node.id, idx);
		}

		let mut links = Vec::new();
		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				links.push(LinkInfo {
					source: src,
					target: tgt,
					strength: link.strength,
					description: link.description.clone(),
				});
			} else {
				log::debug!(
					"network graph: skipping link {} -> {} with unknown endpoint",
					link.source,
					link.target
				);
			}
		}

		Self {
			graph,
			links,
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			simulation: Simulation::default(),
			width,
			height,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut out = HashMap::new();
		self.graph.visit_nodes(|node| {
			out.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		out
	}

	pub fn node_info(&self, idx: DefaultNodeIdx) -> Option<NodeInfo> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.clone());
			}
		});
		found
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if dx.hypot(dy) <= node.data.user_data.radius {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn link_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let p = self.screen_to_graph(sx, sy);
		let positions = self.positions();
		self.links
			.iter()
			.enumerate()
			.filter_map(|(i, link)| {
				let a = *positions.get(&link.source)?;
				let b = *positions.get(&link.target)?;
				let d = distance_to_segment(p, a, b);
				let reach = LINK_HIT_DISTANCE.max(link_width(link.strength) / 2.0);
				(d <= reach).then_some((i, d))
			})
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	/// What the pointer is over; nodes take precedence over links.
	pub fn target_at(&self, sx: f64, sy: f64) -> Option<HoverTarget> {
		self.node_at_position(sx, sy)
			.map(HoverTarget::Node)
			.or_else(|| self.link_at_position(sx, sy).map(HoverTarget::Link))
	}

	pub fn set_hover(&mut self, target: Option<HoverTarget>) {
		if self.hover.target == target {
			return;
		}
		self.hover.target = target;
		self.hover.neighbors.clear();

		if let Some(HoverTarget::Node(idx)) = target {
			for link in &self.links {
				if link.source == idx {
					self.hover.neighbors.insert(link.target);
				} else if link.target == idx {
					self.hover.neighbors.insert(link.source);
				}
			}
		}
	}

	pub fn hovered_node(&self) -> Option<DefaultNodeIdx> {
		match self.hover.target {
			Some(HoverTarget::Node(idx)) => Some(idx),
			_ => None,
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hovered_node() == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn link_emphasis(&self, link: usize) -> LinkEmphasis {
		match (self.hovered_node(), self.links.get(link)) {
			(Some(idx), Some(info)) if info.touches(idx) => LinkEmphasis::Highlighted,
			(Some(_), Some(_)) => LinkEmphasis::Dimmed,
			_ => LinkEmphasis::Normal,
		}
	}

	pub fn tooltip(&self) -> Option<TooltipContent> {
		match self.hover.target? {
			HoverTarget::Node(idx) => self.node_info(idx).map(|info| node_tooltip(&info.symbol)),
			HoverTarget::Link(i) => {
				let link = self.links.get(i)?;
				let source = self.node_info(link.source)?;
				let target = self.node_info(link.target)?;
				Some(link_tooltip(&source.symbol.name, &target.symbol.name, link))
			}
		}
	}

	/// Pins `idx` under the pointer and heats the layout.
	pub fn begin_drag(&mut self, idx: DefaultNodeIdx, sx: f64, sy: f64) {
		self.drag = DragState {
			active: true,
			node_idx: Some(idx),
			moved: false,
			start_x: sx,
			start_y: sy,
			..DragState::default()
		};
		let drag = &mut self.drag;
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				drag.node_start_x = node.data.x;
				drag.node_start_y = node.data.y;
				node.data.is_anchor = true;
			}
		});
		self.simulation.heat();
	}

	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		let Some(idx) = self.drag.node_idx.filter(|_| self.drag.active) else {
			return;
		};
		let (dsx, dsy) = (sx - self.drag.start_x, sy - self.drag.start_y);
		if dsx.hypot(dsy) > CLICK_TOLERANCE {
			self.drag.moved = true;
		}
		let (nx, ny) = (
			self.drag.node_start_x + (dsx / self.transform.k) as f32,
			self.drag.node_start_y + (dsy / self.transform.k) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
			}
		});
	}

	/// Releases the dragged node. Returns it when the press never moved,
	/// i.e. when it was a click.
	pub fn end_drag(&mut self) -> Option<DefaultNodeIdx> {
		if !self.drag.active {
			return None;
		}
		let idx = self.drag.node_idx;
		let clicked = !self.drag.moved;
		if let Some(idx) = idx {
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.is_anchor = false;
				}
			});
		}
		self.simulation.cool();
		self.drag = DragState::default();
		idx.filter(|_| clicked)
	}

	pub fn begin_pan(&mut self, sx: f64, sy: f64) {
		self.pan = PanState {
			active: true,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn pan_to(&mut self, sx: f64, sy: f64) {
		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	pub fn release(&mut self) {
		self.end_drag();
		self.pan.active = false;
	}

	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f32) {
		let target = if self.hovered_node().is_some() { 1.0 } else { 0.0 };
		self.hover.highlight_t += (target - self.hover.highlight_t) * (dt as f64 * 8.0).min(1.0);
		if self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
		}

		if !self.simulation.step() {
			return;
		}
		self.graph.update(dt);
		self.apply_layout_forces();
	}

	fn apply_layout_forces(&mut self) {
		let mut order = Vec::new();
		let mut bodies = Vec::new();
		self.graph.visit_nodes(|node| {
			order.push(node.index());
			bodies.push(Body {
				x: node.x() as f64,
				y: node.y() as f64,
				pinned: node.data.is_anchor,
			});
		});
		let slot: HashMap<DefaultNodeIdx, usize> =
			order.iter().enumerate().map(|(i, idx)| (*idx, i)).collect();
		let springs: Vec<Spring> = self
			.links
			.iter()
			.filter_map(|link| {
				Some(Spring {
					source: *slot.get(&link.source)?,
					target: *slot.get(&link.target)?,
					strength: link.strength,
				})
			})
			.collect();

		apply_forces(
			&mut bodies,
			&springs,
			(self.width / 2.0, self.height / 2.0),
			self.simulation.alpha,
		);

		self.graph.visit_nodes_mut(|node| {
			if node.data.is_anchor {
				return;
			}
			if let Some(body) = slot.get(&node.index()).map(|&i| bodies[i]) {
				node.data.x = body.x as f32;
				node.data.y = body.y as f32;
			}
		});
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.simulation.restart();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::NetworkLink;

	fn node(id: i64, name: &str) -> NetworkNode {
		NetworkNode {
			id,
			name: name.into(),
			tradition: "Norse/Germanic".into(),
			element: "Air".into(),
			century: -5,
			..Default::default()
		}
	}

	fn link(source: i64, target: i64, strength: f64) -> NetworkLink {
		NetworkLink {
			source,
			target,
			strength,
			description: "shared motif".into(),
		}
	}

	fn star() -> NetworkPayload {
		NetworkPayload {
			nodes: vec![
				node(1, "Hub"),
				node(2, "A"),
				node(3, "B"),
				node(4, "C"),
				node(5, "D"),
			],
			links: vec![
				link(1, 2, 0.5),
				link(1, 3, 0.8),
				link(4, 1, 0.2),
				link(5, 1, 1.0),
			],
		}
	}

	fn idx_of(state: &ForceGraphState, id: i64) -> DefaultNodeIdx {
		let mut found = None;
		state.graph.visit_nodes(|n| {
			if n.data.user_data.symbol.id == id {
				found = Some(n.index());
			}
		});
		found.unwrap()
	}

	#[test]
	fn radius_grows_with_degree() {
		assert_eq!(node_radius(4), 10.0);
		assert_eq!(node_radius(0), 8.0);
		let state = ForceGraphState::new(&star(), 600.0, 400.0);
		let hub = state.node_info(idx_of(&state, 1)).unwrap();
		assert_eq!(hub.radius, 10.0);
		let leaf = state.node_info(idx_of(&state, 2)).unwrap();
		assert_eq!(leaf.radius, 8.5);
	}

	#[test]
	fn links_to_unknown_nodes_are_dropped() {
		let mut data = star();
		data.links.push(link(1, 99, 0.4));
		let state = ForceGraphState::new(&data, 600.0, 400.0);
		assert_eq!(state.links.len(), 4);
		assert_eq!(state.node_info(idx_of(&state, 1)).unwrap().radius, 10.0);
	}

	#[test]
	fn hovering_a_node_highlights_incident_links_only() {
		let mut data = star();
		data.links.push(link(2, 3, 0.3));
		let mut state = ForceGraphState::new(&data, 600.0, 400.0);
		let a = idx_of(&state, 2);
		state.set_hover(Some(HoverTarget::Node(a)));

		assert!(state.is_highlighted(a));
		assert!(state.is_highlighted(idx_of(&state, 1)));
		assert!(state.is_highlighted(idx_of(&state, 3)));
		assert!(!state.is_highlighted(idx_of(&state, 4)));
		assert_eq!(state.link_emphasis(0), LinkEmphasis::Highlighted);
		assert_eq!(state.link_emphasis(1), LinkEmphasis::Dimmed);
		assert_eq!(state.link_emphasis(4), LinkEmphasis::Highlighted);

		state.set_hover(None);
		assert_eq!(state.link_emphasis(1), LinkEmphasis::Normal);
		assert!(state.hover.neighbors.is_empty());
	}

	#[test]
	fn node_tooltip_shows_approximate_origin() {
		let content = node_tooltip(&node(1, "Valknut"));
		assert_eq!(content.title, "Valknut");
		assert!(content.lines.contains(&"Origin: ~500 BCE".to_string()));
		assert!(content.lines.contains(&"Tradition: Norse/Germanic".to_string()));
	}

	#[test]
	fn link_tooltip_names_both_ends() {
		let state = ForceGraphState::new(&star(), 600.0, 400.0);
		let content = link_tooltip("Hub", "B", &state.links[1]);
		assert_eq!(content.title, "Hub → B");
		assert_eq!(content.lines, vec!["shared motif".to_string(), "Strength: 0.8".to_string()]);
	}

	#[test]
	fn drag_pins_then_releases() {
		let mut state = ForceGraphState::new(&star(), 600.0, 400.0);
		let hub = idx_of(&state, 1);
		state.begin_drag(hub, 100.0, 100.0);
		let mut pinned = false;
		state.graph.visit_nodes(|n| {
			if n.index() == hub {
				pinned = n.data.is_anchor;
			}
		});
		assert!(pinned);
		assert!(state.simulation.alpha_target > 0.0);

		state.drag_to(160.0, 100.0);
		assert_eq!(state.end_drag(), None, "a moved press is not a click");

		state.graph.visit_nodes(|n| {
			if n.index() == hub {
				pinned = n.data.is_anchor;
			}
		});
		assert!(!pinned);
		assert_eq!(state.simulation.alpha_target, 0.0);
	}

	#[test]
	fn press_without_movement_is_a_click() {
		let mut state = ForceGraphState::new(&star(), 600.0, 400.0);
		let hub = idx_of(&state, 1);
		state.begin_drag(hub, 100.0, 100.0);
		state.drag_to(101.0, 101.0);
		assert_eq!(state.end_drag(), Some(hub));
	}

	#[test]
	fn zoom_is_clamped() {
		let mut state = ForceGraphState::new(&star(), 600.0, 400.0);
		for _ in 0..100 {
			state.zoom_at(300.0, 200.0, -1.0);
		}
		assert_eq!(state.transform.k, MAX_ZOOM);
		for _ in 0..100 {
			state.zoom_at(300.0, 200.0, 1.0);
		}
		assert_eq!(state.transform.k, MIN_ZOOM);
	}

	#[test]
	fn segment_distance() {
		assert_eq!(distance_to_segment((5.0, 3.0), (0.0, 0.0), (10.0, 0.0)), 3.0);
		assert_eq!(distance_to_segment((-4.0, 3.0), (0.0, 0.0), (10.0, 0.0)), 5.0);
	}
}
