use leptos::prelude::*;
use leptos_router::components::A;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="container not-found">
			<h1>"Page not found"</h1>
			<p>"There is nothing at this address."</p>
			<A href="/">"Back to the dashboard"</A>
		</div>
	}
}
