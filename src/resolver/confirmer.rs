use std::fmt;
use std::sync::Arc;

/// The confirmation dialog of the host environment.
///
/// Mutating actions ask the `Confirmer` with their prompt before any request
/// goes out. A host wires its own blocking prompt via [`Confirmer::from_fn`];
/// the default confirms everything, which suits non-interactive callers.
#[derive(Clone, Default)]
pub enum Confirmer {
	#[default]
	AlwaysConfirm,
	ConfirmFn(Arc<ConfirmFn>),
}

pub type ConfirmFn = dyn Fn(&str) -> bool + Send + Sync;

impl Confirmer {
	pub fn from_fn(confirm_fn: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
		Self::ConfirmFn(Arc::new(confirm_fn))
	}

	#[must_use]
	pub fn confirm(&self, prompt: &str) -> bool {
		match self {
			Self::AlwaysConfirm => true,
			Self::ConfirmFn(confirm_fn) => confirm_fn(prompt),
		}
	}
}

// region:    --- Debug Boilerplate

impl fmt::Debug for Confirmer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::AlwaysConfirm => write!(f, "Confirmer::AlwaysConfirm"),
			Self::ConfirmFn(_) => write!(f, "Confirmer::ConfirmFn(..)"),
		}
	}
}

// endregion: --- Debug Boilerplate
