//! Floating hover tooltip shared by the charts.

use leptos::prelude::*;

/// Offset from the pointer, in CSS pixels.
pub const OFFSET: (f64, f64) = (10.0, -28.0);
pub const SHOW_MS: u32 = 200;
pub const HIDE_MS: u32 = 500;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipContent {
	pub title: String,
	pub lines: Vec<String>,
	pub note: Option<String>,
}

/// Tooltip signals. Content survives `hide` so the fade-out still has text.
#[derive(Clone, Copy)]
pub struct Tooltip {
	content: RwSignal<Option<TooltipContent>>,
	visible: RwSignal<bool>,
	position: RwSignal<(f64, f64)>,
}

impl Default for Tooltip {
	fn default() -> Self {
		Self {
			content: RwSignal::new(None),
			visible: RwSignal::new(false),
			position: RwSignal::new((0.0, 0.0)),
		}
	}
}

impl Tooltip {
	pub fn show(&self, content: TooltipContent, client_x: f64, client_y: f64) {
		if self.content.with_untracked(|c| c.as_ref() != Some(&content)) {
			self.content.set(Some(content));
		}
		if !self.visible.get_untracked() {
			self.visible.set(true);
		}
		self.move_to(client_x, client_y);
	}

	pub fn move_to(&self, client_x: f64, client_y: f64) {
		self.position.set((client_x + OFFSET.0, client_y + OFFSET.1));
	}

	pub fn hide(&self) {
		if self.visible.get_untracked() {
			self.visible.set(false);
		}
	}
}

#[component]
pub fn TooltipOverlay(tooltip: Tooltip) -> impl IntoView {
	let style = move || {
		let (x, y) = tooltip.position.get();
		let (opacity, ms) = if tooltip.visible.get() {
			(0.9, SHOW_MS)
		} else {
			(0.0, HIDE_MS)
		};
		format!(
			"left: {x}px; top: {y}px; opacity: {opacity}; transition: opacity {ms}ms;"
		)
	};

	view! {
		<div class="chart-tooltip" style=style>
			{move || {
				tooltip
					.content
					.get()
					.map(|content| {
						view! {
							<strong>{content.title}</strong>
							{content
								.lines
								.into_iter()
								.map(|line| view! { <br /><span>{line}</span> })
								.collect_view()}
							{content.note.map(|note| view! { <br /><span class="text-muted">{note}</span> })}
						}
					})
			}}
		</div>
	}
}
