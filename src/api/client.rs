//! HTTP GET helpers for every endpoint the dashboard reads.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::error::FetchError;
use super::types::*;

/// Default REST base path, relative to the page origin.
pub const DEFAULT_API_BASE: &str = "/api";

/// Where the backend lives. Provided once through context by the app shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	pub base: String,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self::new(DEFAULT_API_BASE)
	}
}

impl ApiConfig {
	pub fn new(base: impl Into<String>) -> Self {
		let base: String = base.into();
		Self {
			base: base.trim_end_matches('/').to_string(),
		}
	}

	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.base, path.trim_start_matches('/'))
	}

	pub fn search_url(&self, query: &str) -> String {
		format!(
			"{}?q={}",
			self.endpoint("search"),
			urlencoding::encode(query)
		)
	}

	pub fn connections_url(&self, symbol_id: i64) -> String {
		self.endpoint(&format!("symbols/{}/connections", symbol_id))
	}

	pub async fn dashboard_summary(&self) -> Result<DashboardSummary, FetchError> {
		get_json(&self.endpoint("dashboard/summary")).await
	}

	pub async fn element_distribution(&self) -> Result<Vec<ElementShare>, FetchError> {
		get_json(&self.endpoint("element-distribution")).await
	}

	pub async fn network(&self) -> Result<NetworkPayload, FetchError> {
		get_json(&self.endpoint("network")).await
	}

	pub async fn timeline(&self) -> Result<Vec<TimelineEntry>, FetchError> {
		get_json(&self.endpoint("timeline")).await
	}

	pub async fn search(&self, query: &str) -> Result<Vec<Symbol>, FetchError> {
		get_json(&self.search_url(query)).await
	}

	pub async fn connections(&self, symbol_id: i64) -> Result<Vec<ConnectedSymbol>, FetchError> {
		get_json(&self.connections_url(symbol_id)).await
	}

	pub async fn tradition_timeline(&self) -> Result<Vec<TraditionSpan>, FetchError> {
		get_json(&self.endpoint("tradition-timeline")).await
	}

	pub async fn tradition_frequency(&self) -> Result<Vec<TraditionCount>, FetchError> {
		get_json(&self.endpoint("tradition-frequency")).await
	}

	pub async fn geographic_distribution(&self) -> Result<Vec<RegionCount>, FetchError> {
		get_json(&self.endpoint("geographic-distribution")).await
	}
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
	let response = Request::get(url)
		.send()
		.await
		.map_err(|e| FetchError::Network(e.to_string()))?;

	log::debug!("GET {} -> {}", url, response.status());

	if !response.ok() {
		return Err(FetchError::Status {
			status: response.status(),
			status_text: response.status_text(),
		});
	}

	response
		.json()
		.await
		.map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoints_join_without_doubled_slashes() {
		let api = ApiConfig::new("https://atlas.example/api/");
		assert_eq!(
			api.endpoint("/dashboard/summary"),
			"https://atlas.example/api/dashboard/summary"
		);
		assert_eq!(ApiConfig::default().endpoint("network"), "/api/network");
	}

	#[test]
	fn search_query_is_url_encoded() {
		let api = ApiConfig::default();
		assert_eq!(api.search_url("sun"), "/api/search?q=sun");
		assert_eq!(api.search_url("sun god"), "/api/search?q=sun%20god");
		assert_eq!(api.search_url("yin&yang"), "/api/search?q=yin%26yang");
	}

	#[test]
	fn connections_url_embeds_symbol_id() {
		assert_eq!(
			ApiConfig::default().connections_url(42),
			"/api/symbols/42/connections"
		);
	}
}
