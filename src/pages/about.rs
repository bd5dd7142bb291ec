use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn About() -> impl IntoView {
	view! {
		<div class="container about">
			<h1>"About Symbol Atlas"</h1>
			<p>
				"A reference of mythological and religious symbols, grouped by tradition "
				"and classical element. The dashboard charts how symbols are distributed "
				"across elements, regions and time, and how they connect to each other."
			</p>
			<p>
				"Click any symbol in the timeline, the network or the search results to "
				"see its details and its connected symbols."
			</p>
			<A href="/">"Back to the dashboard"</A>
		</div>
	}
}
