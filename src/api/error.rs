use thiserror::Error;

/// Failure at a widget's fetch boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
	/// The request never produced a response.
	#[error("network error: {0}")]
	Network(String),

	/// The backend answered with a non-2xx status.
	#[error("HTTP {status} {status_text}")]
	Status { status: u16, status_text: String },

	/// The body was not the JSON shape the widget expects.
	#[error("malformed response: {0}")]
	Decode(String),
}
