//! REST client for the symbol dataset backend.

mod client;
mod error;
mod types;

pub use client::*;
pub use error::FetchError;
pub use types::*;
