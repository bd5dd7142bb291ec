//! Drill-down panel shared by the timeline, the network graph and search.

use leptos::prelude::*;

use crate::api::{ApiConfig, ConnectedSymbol, Symbol};
use crate::format::format_year;
use crate::widget::{Load, Widget};

pub const CONNECTIONS_LOADING: &str = "Loading...";
pub const NO_CONNECTIONS: &str = "No connected symbols found.";
pub const CONNECTIONS_FAILED: &str = "Error loading connected symbols";

/// Selected symbol and its connections. Lives in context so any widget can
/// open the panel.
#[derive(Clone, Copy)]
pub struct SymbolDetails {
	pub selected: RwSignal<Option<Symbol>>,
	pub connections: Widget<Vec<ConnectedSymbol>>,
	api: StoredValue<ApiConfig>,
}

impl SymbolDetails {
	pub fn new(api: ApiConfig) -> Self {
		Self {
			selected: RwSignal::new(None),
			connections: Widget::new("symbol connections"),
			api: StoredValue::new(api),
		}
	}

	/// Show `symbol` right away and fetch its connections in the background.
	pub fn show(&self, symbol: Symbol) {
		log::info!("showing details for symbol {} ({})", symbol.id, symbol.name);
		let id = symbol.id;
		self.selected.set(Some(symbol));

		let api = self.api.get_value();
		self.connections
			.dispatch(async move { api.connections(id).await });
	}
}

pub fn provide_symbol_details(api: ApiConfig) {
	provide_context(SymbolDetails::new(api));
}

pub fn use_symbol_details() -> SymbolDetails {
	expect_context::<SymbolDetails>()
}

/// Placeholder text for the connections list, or `None` when there are
/// connections to list.
pub fn connections_message(load: &Load<Vec<ConnectedSymbol>>) -> Option<&'static str> {
	match load {
		Load::Idle | Load::Loading => Some(CONNECTIONS_LOADING),
		Load::Failed(_) => Some(CONNECTIONS_FAILED),
		Load::Populated(list) if list.is_empty() => Some(NO_CONNECTIONS),
		Load::Populated(_) => None,
	}
}

#[component]
pub fn SymbolDetailsPanel() -> impl IntoView {
	let details = use_symbol_details();

	let class = move || {
		if details.selected.with(Option::is_some) {
			"symbol-details"
		} else {
			"symbol-details d-none"
		}
	};

	let connections = move || {
		details.connections.load.with(|load| match connections_message(load) {
			Some(message) => {
				let class = if matches!(load, Load::Failed(_)) {
					"text-danger"
				} else {
					""
				};
				view! { <p class=class>{message}</p> }.into_any()
			}
			None => load
				.populated()
				.cloned()
				.unwrap_or_default()
				.into_iter()
				.map(|connected| {
					view! {
						<div class="connected-symbol-item">
							<span class="symbol-name">{connected.name}</span>
							<span class="symbol-tradition">{connected.tradition}</span>
						</div>
					}
				})
				.collect_view()
				.into_any(),
		})
	};

	view! {
		<div id="symbolDetails" class=class>
			{move || {
				details
					.selected
					.get()
					.map(|symbol| {
						view! {
							<h4>{symbol.name}</h4>
							<p><strong>"Tradition: "</strong>{symbol.tradition}</p>
							<p><strong>"Element: "</strong>{symbol.element}</p>
							{symbol
								.century_origin
								.map(|origin| {
									view! { <p><strong>"Origin: "</strong>{format_year(origin)}</p> }
								})}
							{symbol.description.map(|text| view! { <p>{text}</p> })}
						}
					})
			}}
			<h5>"Connected Symbols"</h5>
			<div id="connectedSymbols" class="connected-symbols">
				{connections}
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn connections_show_loading_until_resolved() {
		assert_eq!(connections_message(&Load::Loading), Some("Loading..."));
		assert_eq!(connections_message(&Load::Idle), Some("Loading..."));
	}

	#[test]
	fn empty_connections_have_their_own_message() {
		assert_eq!(
			connections_message(&Load::Populated(Vec::new())),
			Some("No connected symbols found.")
		);
	}

	#[test]
	fn failure_only_affects_connections_section() {
		assert_eq!(
			connections_message(&Load::Failed("network error: offline".into())),
			Some("Error loading connected symbols")
		);
		let listed = Load::Populated(vec![ConnectedSymbol {
			name: "Yggdrasil".into(),
			tradition: "Norse".into(),
		}]);
		assert_eq!(connections_message(&listed), None);
	}
}
