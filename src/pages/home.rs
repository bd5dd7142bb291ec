use leptos::prelude::*;

use crate::components::{
	ElementChart, NetworkGraph, RegionChart, SearchPanel, SummaryLoader, SymbolDetailsPanel,
	SymbolTimeline, TraditionFrequency, TraditionTimeline,
};

/// Dashboard: every widget fetches on mount and fails on its own.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="container-fluid dashboard">
				<header class="dashboard-header">
					<h1>"Symbol Atlas"</h1>
					<p class="subtitle">"Symbols, elements and traditions across time."</p>
					<SummaryLoader />
				</header>

				<div class="row">
					<section class="col-md-8 card">
						<h3>"Symbol Network"</h3>
						<p class="text-muted">
							"Drag nodes to reposition. Scroll to zoom. Drag background to pan."
						</p>
						<NetworkGraph />
					</section>
					<aside class="col-md-4">
						<section class="card">
							<h3>"Search"</h3>
							<SearchPanel />
						</section>
						<section class="card">
							<SymbolDetailsPanel />
						</section>
					</aside>
				</div>

				<div class="row">
					<section class="col-md-6 card">
						<h3>"Elements"</h3>
						<ElementChart />
					</section>
					<section class="col-md-6 card">
						<h3>"Regions"</h3>
						<RegionChart />
					</section>
				</div>

				<section class="card">
					<SymbolTimeline />
				</section>

				<div class="row">
					<section class="col-md-8 card">
						<h3>"Traditions"</h3>
						<TraditionTimeline />
					</section>
					<section class="col-md-4 card">
						<h3>"Symbols per Tradition"</h3>
						<TraditionFrequency />
					</section>
				</div>
			</div>
		</ErrorBoundary>
	}
}
