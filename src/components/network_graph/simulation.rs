//! Temperature schedule and the forces layered on top of the integrator.
//!
//! `force_graph` handles many-body repulsion. Link distance, centering and
//! collision are applied here as position corrections, scaled by `alpha`.

pub const ALPHA_MIN: f64 = 0.001;
/// Reaches `ALPHA_MIN` from 1.0 in roughly 300 ticks.
pub const ALPHA_DECAY: f64 = 0.0228;
/// Target temperature while a node is being dragged.
pub const DRAG_ALPHA_TARGET: f64 = 0.3;
pub const COLLISION_RADIUS: f64 = 20.0;

/// Rest length of a link: stronger links sit closer.
pub fn link_distance(strength: f64) -> f64 {
	150.0 - strength * 50.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
	pub alpha: f64,
	pub alpha_target: f64,
}

impl Default for Simulation {
	fn default() -> Self {
		Self {
			alpha: 1.0,
			alpha_target: 0.0,
		}
	}
}

impl Simulation {
	pub fn heat(&mut self) {
		self.alpha_target = DRAG_ALPHA_TARGET;
		// restart a cooled simulation
		if self.alpha < ALPHA_MIN {
			self.alpha = ALPHA_MIN;
		}
	}

	/// Re-warms the layout without changing its target, e.g. after a resize.
	pub fn restart(&mut self) {
		self.alpha = self.alpha.max(DRAG_ALPHA_TARGET);
	}

	pub fn cool(&mut self) {
		self.alpha_target = 0.0;
	}

	pub fn is_running(&self) -> bool {
		self.alpha >= ALPHA_MIN
	}

	/// Advances the temperature; returns whether this tick should move nodes.
	pub fn step(&mut self) -> bool {
		if !self.is_running() {
			return false;
		}
		self.alpha += (self.alpha_target - self.alpha) * ALPHA_DECAY;
		self.is_running()
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
	pub x: f64,
	pub y: f64,
	pub pinned: bool,
}

/// Link endpoints index into the body slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	pub source: usize,
	pub target: usize,
	pub strength: f64,
}

pub fn apply_forces(bodies: &mut [Body], springs: &[Spring], center: (f64, f64), alpha: f64) {
	apply_links(bodies, springs, alpha);
	apply_collision(bodies);
	apply_centering(bodies, center);
}

fn nudge(bodies: &mut [Body], i: usize, dx: f64, dy: f64) {
	if !bodies[i].pinned {
		bodies[i].x += dx;
		bodies[i].y += dy;
	}
}

fn apply_links(bodies: &mut [Body], springs: &[Spring], alpha: f64) {
	for spring in springs {
		let (s, t) = (spring.source, spring.target);
		if s == t || s >= bodies.len() || t >= bodies.len() {
			continue;
		}
		let (dx, dy) = (bodies[t].x - bodies[s].x, bodies[t].y - bodies[s].y);
		let len = dx.hypot(dy);
		if len < 1e-6 {
			continue;
		}
		let k = (len - link_distance(spring.strength)) / len * alpha * spring.strength * 0.5;
		nudge(bodies, s, dx * k, dy * k);
		nudge(bodies, t, -dx * k, -dy * k);
	}
}

fn apply_collision(bodies: &mut [Body]) {
	let min_dist = COLLISION_RADIUS * 2.0;
	for i in 0..bodies.len() {
		for j in (i + 1)..bodies.len() {
			let (dx, dy) = (bodies[j].x - bodies[i].x, bodies[j].y - bodies[i].y);
			let dist = dx.hypot(dy);
			if dist >= min_dist {
				continue;
			}
			// coincident bodies get pushed apart along an arbitrary axis
			let (ux, uy) = if dist < 1e-6 {
				(1.0, 0.0)
			} else {
				(dx / dist, dy / dist)
			};
			let overlap = min_dist - dist;
			let (share_i, share_j) = match (bodies[i].pinned, bodies[j].pinned) {
				(true, true) => continue,
				(true, false) => (0.0, 1.0),
				(false, true) => (1.0, 0.0),
				(false, false) => (0.5, 0.5),
			};
			nudge(bodies, i, -ux * overlap * share_i, -uy * overlap * share_i);
			nudge(bodies, j, ux * overlap * share_j, uy * overlap * share_j);
		}
	}
}

fn apply_centering(bodies: &mut [Body], center: (f64, f64)) {
	let free: Vec<usize> = (0..bodies.len()).filter(|&i| !bodies[i].pinned).collect();
	if free.is_empty() {
		return;
	}
	let n = free.len() as f64;
	let (sx, sy) = free
		.iter()
		.fold((0.0, 0.0), |(x, y), &i| (x + bodies[i].x, y + bodies[i].y));
	let (dx, dy) = (center.0 - sx / n, center.1 - sy / n);
	for i in free {
		nudge(bodies, i, dx, dy);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn body(x: f64, y: f64) -> Body {
		Body { x, y, pinned: false }
	}

	#[test]
	fn cools_to_a_stop_without_target() {
		let mut sim = Simulation::default();
		let ticks = (0..1000).take_while(|_| sim.step()).count();
		assert!(ticks > 200 && ticks < 400, "stopped after {ticks} ticks");
		assert!(!sim.is_running());
	}

	#[test]
	fn drag_heats_and_release_cools() {
		let mut sim = Simulation::default();
		while sim.step() {}
		sim.heat();
		assert!(sim.is_running());
		for _ in 0..2000 {
			sim.step();
		}
		assert!((sim.alpha - DRAG_ALPHA_TARGET).abs() < 0.01);
		sim.cool();
		while sim.step() {}
		assert!(!sim.is_running());
	}

	#[test]
	fn stronger_links_rest_closer() {
		assert_eq!(link_distance(0.0), 150.0);
		assert_eq!(link_distance(1.0), 100.0);
	}

	#[test]
	fn stretched_link_pulls_endpoints_together() {
		let mut bodies = [body(0.0, 0.0), body(400.0, 0.0)];
		let springs = [Spring {
			source: 0,
			target: 1,
			strength: 1.0,
		}];
		apply_links(&mut bodies, &springs, 1.0);
		assert!(bodies[0].x > 0.0);
		assert!(bodies[1].x < 400.0);
	}

	#[test]
	fn pinned_bodies_stay_put() {
		let mut bodies = [
			Body {
				x: 10.0,
				y: 10.0,
				pinned: true,
			},
			body(15.0, 10.0),
		];
		apply_forces(&mut bodies, &[], (500.0, 500.0), 1.0);
		assert_eq!((bodies[0].x, bodies[0].y), (10.0, 10.0));
		assert!(bodies[1].x != 15.0);
	}

	#[test]
	fn collision_separates_overlapping_bodies() {
		let mut bodies = [body(0.0, 0.0), body(10.0, 0.0)];
		apply_collision(&mut bodies);
		let dist = (bodies[1].x - bodies[0].x).hypot(bodies[1].y - bodies[0].y);
		assert!((dist - COLLISION_RADIUS * 2.0).abs() < 1e-9);
	}

	#[test]
	fn centering_moves_centroid_to_center() {
		let mut bodies = [body(0.0, 0.0), body(100.0, 0.0)];
		apply_centering(&mut bodies, (300.0, 200.0));
		let cx = (bodies[0].x + bodies[1].x) / 2.0;
		let cy = (bodies[0].y + bodies[1].y) / 2.0;
		assert!((cx - 300.0).abs() < 1e-9 && (cy - 200.0).abs() < 1e-9);
	}
}
