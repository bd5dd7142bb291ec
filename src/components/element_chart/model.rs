use std::f64::consts::{FRAC_PI_2, TAU};

use crate::api::ElementShare;

/// One colour per element. Distributions with more than ten elements run
/// past the end and fall back to `FALLBACK_COLOR`.
pub const PALETTE: [&str; 10] = [
	"#8a2be2", "#9370db", "#6a5acd", "#483d8b", "#7b68ee", "#9932cc", "#ba55d3", "#dda0dd",
	"#d8bfd8", "#ee82ee",
];
pub const FALLBACK_COLOR: &str = "#7f7f7f";

/// Inner radius as a fraction of the outer radius.
pub const HOLE_RATIO: f64 = 0.4;
pub const MARGIN: f64 = 20.0;

/// Slices start at twelve o'clock and run clockwise.
const START_ANGLE: f64 = -FRAC_PI_2;

#[derive(Clone, Debug, PartialEq)]
pub struct DonutSlice {
	pub label: String,
	pub count: u32,
	pub start: f64,
	pub end: f64,
	pub color: Option<&'static str>,
}

impl DonutSlice {
	pub fn mid_angle(&self) -> f64 {
		(self.start + self.end) / 2.0
	}

	pub fn fill(&self) -> &'static str {
		self.color.unwrap_or(FALLBACK_COLOR)
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DonutLayout {
	pub slices: Vec<DonutSlice>,
	pub total: u32,
}

impl DonutLayout {
	pub fn new(shares: &[ElementShare]) -> Self {
		let total: u32 = shares.iter().map(|s| s.count).sum();
		let mut angle = START_ANGLE;
		let slices = shares
			.iter()
			.enumerate()
			.map(|(i, share)| {
				let sweep = if total == 0 {
					0.0
				} else {
					share.count as f64 / total as f64 * TAU
				};
				let slice = DonutSlice {
					label: share.element.clone(),
					count: share.count,
					start: angle,
					end: angle + sweep,
					color: PALETTE.get(i).copied(),
				};
				angle += sweep;
				slice
			})
			.collect();
		Self { slices, total }
	}

	pub fn percent(&self, idx: usize) -> f64 {
		match self.slices.get(idx) {
			Some(slice) if self.total > 0 => slice.count as f64 * 100.0 / self.total as f64,
			_ => 0.0,
		}
	}

	/// Slice under an offset `(dx, dy)` from the donut centre.
	pub fn slice_at(&self, dx: f64, dy: f64, outer: f64) -> Option<usize> {
		let r = dx.hypot(dy);
		if r > outer || r < outer * HOLE_RATIO {
			return None;
		}
		let mut angle = dy.atan2(dx);
		while angle < START_ANGLE {
			angle += TAU;
		}
		while angle >= START_ANGLE + TAU {
			angle -= TAU;
		}
		self.slices
			.iter()
			.position(|s| angle >= s.start && angle < s.end)
	}
}

/// Centre and outer radius for a canvas of the given size.
pub fn geometry(width: f64, height: f64) -> (f64, f64, f64) {
	let outer = (width.min(height) / 2.0 - MARGIN).max(0.0);
	(width / 2.0, height / 2.0, outer)
}

pub fn format_percent(p: f64) -> String {
	format!("{:.1}%", p)
}

pub fn find_element<'a>(shares: &'a [ElementShare], label: &str) -> Option<&'a ElementShare> {
	shares.iter().find(|s| s.element == label)
}

/// Comma-separated traditions of an element, or `None` when it lists none.
pub fn traditions_text(share: &ElementShare) -> Option<String> {
	(!share.traditions.is_empty()).then(|| share.traditions.join(", "))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn share(element: &str, count: u32) -> ElementShare {
		ElementShare {
			element: element.into(),
			count,
			description: None,
			symbols: Vec::new(),
			traditions: Vec::new(),
		}
	}

	#[test]
	fn first_ten_elements_get_distinct_palette_colors() {
		let mut shares = vec![share("Fire", 12)];
		shares.extend((1..11).map(|i| share(&format!("E{i}"), 1)));
		let layout = DonutLayout::new(&shares);

		let colors: Vec<_> = layout.slices[..10].iter().map(|s| s.color).collect();
		for (i, c) in colors.iter().enumerate() {
			assert_eq!(*c, Some(PALETTE[i]));
		}
		let mut unique = colors.clone();
		unique.sort();
		unique.dedup();
		assert_eq!(unique.len(), 10);

		// past the palette: untested territory, drawn in the fallback colour
		assert_eq!(layout.slices[10].color, None);
		assert_eq!(layout.slices[10].fill(), FALLBACK_COLOR);
	}

	#[test]
	fn slices_cover_the_full_circle() {
		let layout = DonutLayout::new(&[share("Fire", 1), share("Water", 3)]);
		assert_eq!(layout.total, 4);
		let last = layout.slices.last().unwrap();
		assert!((last.end - (START_ANGLE + TAU)).abs() < 1e-9);
		assert!((layout.percent(1) - 75.0).abs() < 1e-9);
		assert_eq!(format_percent(layout.percent(0)), "25.0%");
	}

	#[test]
	fn hit_test_respects_hole_and_angles() {
		// Fire covers the top-right quarter, Water the rest.
		let layout = DonutLayout::new(&[share("Fire", 1), share("Water", 3)]);
		let outer = 100.0;
		assert_eq!(layout.slice_at(50.0, -50.0, outer), Some(0));
		assert_eq!(layout.slice_at(-50.0, 50.0, outer), Some(1));
		assert_eq!(layout.slice_at(-50.0, -50.0, outer), Some(1));
		assert_eq!(layout.slice_at(10.0, -10.0, outer), None);
		assert_eq!(layout.slice_at(100.0, 100.0, outer), None);
	}

	#[test]
	fn empty_distribution_has_no_hits() {
		let layout = DonutLayout::new(&[]);
		assert_eq!(layout.slice_at(50.0, 0.0, 100.0), None);
		assert_eq!(layout.percent(0), 0.0);
	}

	#[test]
	fn clicked_label_resolves_to_stored_entry() {
		let shares = vec![share("Fire", 12), share("Earth", 4)];
		assert_eq!(find_element(&shares, "Earth").map(|s| s.count), Some(4));
		assert!(find_element(&shares, "Aether").is_none());
	}

	#[test]
	fn traditions_are_listed_when_present() {
		let mut fire = share("Fire", 12);
		assert_eq!(traditions_text(&fire), None);
		fire.traditions = vec!["Zoroastrian".into(), "Vedic".into()];
		assert_eq!(traditions_text(&fire).as_deref(), Some("Zoroastrian, Vedic"));
	}
}
