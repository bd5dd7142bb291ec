//! Submit-driven symbol search.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use super::symbol_details::use_symbol_details;
use crate::api::{ApiConfig, Symbol};
use crate::format::format_year;
use crate::widget::{Load, Widget};

pub const SEARCHING: &str = "Searching...";
pub const NO_RESULTS: &str = "No results found.";

/// Returns the query to send, or `None` when searching should be a no-op.
pub fn prepare_query(raw: &str) -> Option<&str> {
	if raw.is_empty() { None } else { Some(raw) }
}

pub fn origin_text(symbol: &Symbol) -> String {
	symbol.century_origin.map(format_year).unwrap_or_default()
}

#[component]
pub fn SearchPanel() -> impl IntoView {
	let api = StoredValue::new(expect_context::<ApiConfig>());
	let details = use_symbol_details();
	let results = Widget::<Vec<Symbol>>::new("search");
	let query = RwSignal::new(String::new());

	let perform_search = move || {
		let raw = query.get_untracked();
		let Some(q) = prepare_query(&raw) else {
			return;
		};
		log::info!("searching for {:?}", q);
		let q = q.to_string();
		let api = api.get_value();
		results.dispatch(async move { api.search(&q).await });
	};

	let on_keypress = move |ev: KeyboardEvent| {
		if ev.key() == "Enter" {
			perform_search();
		}
	};

	let listing = move || match results.load.get() {
		Load::Idle => ().into_any(),
		Load::Loading => view! {
			<div class="text-center">
				<div class="loading-spinner"></div>
				<p>{SEARCHING}</p>
			</div>
		}
		.into_any(),
		Load::Failed(err) => view! { <p class="text-danger">"Error: " {err}</p> }.into_any(),
		Load::Populated(symbols) if symbols.is_empty() => {
			view! { <p class="text-muted">{NO_RESULTS}</p> }.into_any()
		}
		Load::Populated(symbols) => symbols
			.into_iter()
			.map(|symbol| {
				let origin = origin_text(&symbol);
				let (name, tradition, element) = (
					symbol.name.clone(),
					symbol.tradition.clone(),
					symbol.element.clone(),
				);
				let on_click = move |_| details.show(symbol.clone());
				view! {
					<div class="search-result-item" on:click=on_click>
						<h6>{name}</h6>
						<p>
							"Tradition: " {tradition} <br />
							"Element: " {element} <br />
							"Origin: " {origin}
						</p>
					</div>
				}
			})
			.collect_view()
			.into_any(),
	};

	view! {
		<div class="search-panel">
			<div class="input-group">
				<input
					id="searchInput"
					type="text"
					class="form-control"
					placeholder="Search symbols, traditions, elements..."
					prop:value=move || query.get()
					on:input=move |ev| query.set(event_target_value(&ev))
					on:keypress=on_keypress
				/>
				<button id="searchButton" class="btn btn-primary" on:click=move |_| perform_search()>
					"Search"
				</button>
			</div>
			<div id="searchResults" class="search-results">{listing}</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_query_is_a_no_op() {
		assert_eq!(prepare_query(""), None);
		assert_eq!(prepare_query("sun"), Some("sun"));
	}

	#[test]
	fn result_origin_uses_era_suffix() {
		let symbol = Symbol {
			id: 9,
			name: "Sun Wheel".into(),
			tradition: "Norse".into(),
			element: "Fire".into(),
			century_origin: Some(-200),
			description: None,
		};
		assert_eq!(origin_text(&symbol), "200 BCE");
	}

	#[test]
	fn no_results_message_is_exact() {
		assert_eq!(NO_RESULTS, "No results found.");
	}
}
