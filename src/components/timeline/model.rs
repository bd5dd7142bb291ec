use crate::api::TimelineEntry;
use crate::format::primary_tradition;

const SERIES_COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const MARGIN: f64 = 40.0;
pub const POINT_RADIUS: f64 = 5.0;
pub const HIT_RADIUS: f64 = 8.0;

/// Entries sharing a primary tradition. `ordinal` only picks the row on
/// screen and starts at 1.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineRow {
	pub tradition: String,
	pub ordinal: usize,
	pub entries: Vec<TimelineEntry>,
}

impl TimelineRow {
	pub fn color(&self) -> &'static str {
		SERIES_COLORS[(self.ordinal - 1) % SERIES_COLORS.len()]
	}
}

/// Sorts by year, then partitions by primary tradition in order of first
/// appearance.
pub fn group_rows(entries: &[TimelineEntry]) -> Vec<TimelineRow> {
	let mut sorted = entries.to_vec();
	sorted.sort_by_key(|e| e.year);

	let mut rows: Vec<TimelineRow> = Vec::new();
	for entry in sorted {
		let primary = primary_tradition(&entry.tradition).to_string();
		match rows.iter_mut().find(|row| row.tradition == primary) {
			Some(row) => row.entries.push(entry),
			None => {
				let ordinal = rows.len() + 1;
				rows.push(TimelineRow {
					tradition: primary,
					ordinal,
					entries: vec![entry],
				});
			}
		}
	}
	rows
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineLayout {
	pub rows: Vec<TimelineRow>,
	pub year_min: i64,
	pub year_max: i64,
	pub width: f64,
	pub height: f64,
}

impl TimelineLayout {
	pub fn new(entries: &[TimelineEntry], width: f64, height: f64) -> Self {
		let rows = group_rows(entries);
		let years = entries.iter().map(|e| e.year);
		Self {
			year_min: years.clone().min().unwrap_or(0),
			year_max: years.max().unwrap_or(0),
			rows,
			width,
			height,
		}
	}

	pub fn x_for(&self, year: i64) -> f64 {
		let span = (self.year_max - self.year_min) as f64;
		let plot_w = (self.width - 2.0 * MARGIN).max(0.0);
		if span <= 0.0 {
			return MARGIN + plot_w / 2.0;
		}
		let pad = span * 0.05;
		MARGIN + ((year - self.year_min) as f64 + pad) / (span + 2.0 * pad) * plot_w
	}

	pub fn y_for(&self, ordinal: usize) -> f64 {
		let plot_h = (self.height - 2.0 * MARGIN).max(0.0);
		let bottom = self.height - MARGIN;
		bottom - ordinal as f64 / (self.rows.len() + 1) as f64 * plot_h
	}

	pub fn points(&self) -> impl Iterator<Item = (&TimelineRow, &TimelineEntry, f64, f64)> {
		self.rows.iter().flat_map(move |row| {
			let y = self.y_for(row.ordinal);
			row.entries
				.iter()
				.map(move |entry| (row, entry, self.x_for(entry.year), y))
		})
	}

	/// Closest point within `HIT_RADIUS` of `(x, y)`.
	pub fn point_at(&self, x: f64, y: f64) -> Option<(&TimelineRow, &TimelineEntry)> {
		self.points()
			.map(|(row, entry, px, py)| (row, entry, (px - x).hypot(py - y)))
			.filter(|(_, _, d)| *d <= HIT_RADIUS)
			.min_by(|a, b| a.2.total_cmp(&b.2))
			.map(|(row, entry, _)| (row, entry))
	}

	pub fn ticks(&self) -> Vec<i64> {
		axis_ticks(self.year_min, self.year_max, 8)
	}
}

/// Round-numbered tick positions covering `min..=max`.
pub fn axis_ticks(min: i64, max: i64, target: usize) -> Vec<i64> {
	if max <= min || target == 0 {
		return vec![min];
	}
	let step = nice_step((max - min) as f64 / target as f64);
	let first = min.div_euclid(step) * step + if min.rem_euclid(step) == 0 { 0 } else { step };
	(0..)
		.map(|i| first + i * step)
		.take_while(|t| *t <= max)
		.collect()
}

fn nice_step(raw: f64) -> i64 {
	if raw <= 1.0 {
		return 1;
	}
	let magnitude = 10f64.powf(raw.log10().floor());
	let norm = raw / magnitude;
	let nice = if norm <= 1.0 {
		1.0
	} else if norm <= 2.0 {
		2.0
	} else if norm <= 5.0 {
		5.0
	} else {
		10.0
	};
	(nice * magnitude) as i64
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(name: &str, tradition: &str, year: i64) -> TimelineEntry {
		TimelineEntry {
			id: 0,
			name: name.into(),
			tradition: tradition.into(),
			element: String::new(),
			year,
			year_display: None,
			century_origin: None,
			description: None,
		}
	}

	#[test]
	fn compound_traditions_share_a_row() {
		let rows = group_rows(&[
			entry("Valknut", "Norse/Germanic", 800),
			entry("Triskelion", "Celtic", -500),
			entry("Kolovrat", "Norse/Slavic", 900),
		]);
		let names: Vec<_> = rows.iter().map(|r| (r.tradition.as_str(), r.ordinal)).collect();
		// sorted by year first, so Celtic is seen before Norse
		assert_eq!(names, vec![("Celtic", 1), ("Norse", 2)]);
		assert_eq!(rows[1].entries.len(), 2);
		assert_eq!(rows[1].entries[0].name, "Valknut");
	}

	#[test]
	fn entries_are_sorted_by_year_within_rows() {
		let rows = group_rows(&[
			entry("B", "Greek", 300),
			entry("A", "Greek", -700),
			entry("C", "Greek", 0),
		]);
		let years: Vec<_> = rows[0].entries.iter().map(|e| e.year).collect();
		assert_eq!(years, vec![-700, 0, 300]);
	}

	#[test]
	fn x_scale_keeps_extremes_inside_plot() {
		let layout = TimelineLayout::new(
			&[entry("A", "Greek", -1000), entry("B", "Roman", 1000)],
			880.0,
			400.0,
		);
		let (lo, hi) = (layout.x_for(-1000), layout.x_for(1000));
		assert!(lo > MARGIN && lo < layout.x_for(0));
		assert!(hi < 880.0 - MARGIN && hi > layout.x_for(0));
		assert!((layout.x_for(0) - 440.0).abs() < 1e-9);
	}

	#[test]
	fn single_year_is_centered() {
		let layout = TimelineLayout::new(&[entry("A", "Greek", 50)], 500.0, 300.0);
		assert_eq!(layout.x_for(50), 250.0);
	}

	#[test]
	fn rows_stack_bottom_up() {
		let layout = TimelineLayout::new(
			&[entry("A", "Greek", 0), entry("B", "Roman", 10)],
			500.0,
			340.0,
		);
		assert!(layout.y_for(1) > layout.y_for(2));
	}

	#[test]
	fn hit_test_finds_nearest_point() {
		let layout = TimelineLayout::new(
			&[entry("A", "Greek", -1000), entry("B", "Greek", 1000)],
			880.0,
			400.0,
		);
		let (x, y) = (layout.x_for(1000), layout.y_for(1));
		let (_, hit) = layout.point_at(x + 2.0, y - 2.0).unwrap();
		assert_eq!(hit.name, "B");
		assert!(layout.point_at(x + 40.0, y).is_none());
	}

	#[test]
	fn ticks_land_on_round_years() {
		assert_eq!(
			axis_ticks(-3000, 2000, 5),
			vec![-3000, -2000, -1000, 0, 1000, 2000]
		);
		assert_eq!(axis_ticks(-150, 150, 3), vec![-100, 0, 100]);
		assert_eq!(axis_ticks(5, 5, 8), vec![5]);
	}
}
