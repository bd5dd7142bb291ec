//! Fetch lifecycle shared by the dashboard widgets.
//!
//! Each widget moves through `Idle -> Loading -> Populated | Failed` and
//! restarts at `Loading` whenever it fetches again. Responses that arrive for
//! anything but the most recently issued request are dropped.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::FetchError;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Load<T> {
	#[default]
	Idle,
	Loading,
	Populated(T),
	Failed(String),
}

impl<T> Load<T> {
	pub fn populated(&self) -> Option<&T> {
		match self {
			Load::Populated(data) => Some(data),
			_ => None,
		}
	}

	pub fn is_loading(&self) -> bool {
		matches!(self, Load::Loading)
	}
}

impl<T> From<Result<T, FetchError>> for Load<T> {
	fn from(result: Result<T, FetchError>) -> Self {
		match result {
			Ok(data) => Load::Populated(data),
			Err(err) => Load::Failed(err.to_string()),
		}
	}
}

/// Identifies one dispatched request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request counter for a single widget.
#[derive(Debug, Default)]
pub struct RequestSequence {
	issued: u64,
}

impl RequestSequence {
	pub fn issue(&mut self) -> Ticket {
		self.issued += 1;
		Ticket(self.issued)
	}

	pub fn is_current(&self, ticket: Ticket) -> bool {
		ticket.0 == self.issued
	}
}

/// Reactive load state plus the sequence guarding it.
pub struct Widget<T: Send + Sync + 'static> {
	pub load: RwSignal<Load<T>>,
	sequence: StoredValue<RequestSequence>,
	name: &'static str,
}

impl<T: Send + Sync + 'static> Clone for Widget<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: Send + Sync + 'static> Copy for Widget<T> {}

impl<T: Clone + Send + Sync + 'static> Widget<T> {
	pub fn new(name: &'static str) -> Self {
		Self {
			load: RwSignal::new(Load::Idle),
			sequence: StoredValue::new(RequestSequence::default()),
			name,
		}
	}

	/// Enter `Loading` and run `request`; its outcome is applied only if no
	/// newer request was dispatched in the meantime.
	pub fn dispatch<F>(&self, request: F)
	where
		F: Future<Output = Result<T, FetchError>> + 'static,
	{
		let Some(ticket) = self.begin() else {
			return;
		};
		let this = *self;
		spawn_local(async move {
			this.settle(ticket, request.await);
		});
	}

	/// Issues a ticket and enters `Loading`. `None` once the widget is disposed.
	fn begin(&self) -> Option<Ticket> {
		let ticket = self.sequence.try_update_value(|seq| seq.issue())?;
		self.load.set(Load::Loading);
		Some(ticket)
	}

	/// Applies `result` when `ticket` is still the latest issued. Returns
	/// whether it was applied.
	fn settle(&self, ticket: Ticket, result: Result<T, FetchError>) -> bool {
		let current = self
			.sequence
			.try_with_value(|seq| seq.is_current(ticket))
			.unwrap_or(false);
		if !current {
			log::debug!("{}: dropping stale response {:?}", self.name, ticket);
			return false;
		}
		match &result {
			Ok(_) => log::info!("{}: data received", self.name),
			Err(err) => log::error!("{}: {}", self.name, err),
		}
		self.load.set(result.into());
		true
	}
}

#[cfg(test)]
mod tests {
	use leptos::reactive::owner::Owner;

	use super::*;

	#[test]
	fn newer_ticket_supersedes_older() {
		let mut seq = RequestSequence::default();
		let first = seq.issue();
		assert!(seq.is_current(first));
		let second = seq.issue();
		assert!(!seq.is_current(first));
		assert!(seq.is_current(second));
	}

	#[test]
	fn result_maps_onto_load_state() {
		let ok: Load<Vec<u32>> = Ok(vec![1, 2]).into();
		assert_eq!(ok.populated(), Some(&vec![1, 2]));

		let failed: Load<Vec<u32>> = Err(FetchError::Status {
			status: 500,
			status_text: "Internal Server Error".into(),
		})
		.into();
		assert_eq!(
			failed,
			Load::Failed("HTTP 500 Internal Server Error".into())
		);
	}

	#[test]
	fn idle_is_the_default() {
		let load: Load<()> = Load::default();
		assert_eq!(load, Load::Idle);
		assert!(!load.is_loading());
		assert!(Load::<()>::Loading.is_loading());
	}

	#[test]
	fn older_request_resolving_last_is_dropped() {
		let owner = Owner::new();
		owner.with(|| {
			let widget = Widget::<u32>::new("symbols");
			let first = widget.begin().unwrap();
			let second = widget.begin().unwrap();
			assert_eq!(widget.load.get_untracked(), Load::Loading);

			assert!(widget.settle(second, Ok(2)));
			assert!(!widget.settle(first, Ok(1)));
			assert_eq!(widget.load.get_untracked(), Load::Populated(2));
		});
	}

	#[test]
	fn stale_failure_does_not_replace_fresh_data() {
		let owner = Owner::new();
		owner.with(|| {
			let widget = Widget::<u32>::new("symbols");
			let first = widget.begin().unwrap();
			let second = widget.begin().unwrap();
			widget.settle(second, Ok(7));
			widget.settle(first, Err(FetchError::Network("offline".into())));
			assert_eq!(widget.load.get_untracked(), Load::Populated(7));
		});
	}

	#[test]
	fn refetch_after_settling_applies_again() {
		let owner = Owner::new();
		owner.with(|| {
			let widget = Widget::<u32>::new("symbols");
			let first = widget.begin().unwrap();
			widget.settle(first, Ok(1));
			let second = widget.begin().unwrap();
			assert_eq!(widget.load.get_untracked(), Load::Loading);
			assert!(widget.settle(second, Ok(3)));
			assert_eq!(widget.load.get_untracked(), Load::Populated(3));
		});
	}
}
