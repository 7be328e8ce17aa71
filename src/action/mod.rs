//! The two confirm-gated mutation actions ported from the store's admin UI:
//! [`crate::Client::delete_item`] and [`crate::Client::update_item`].
//!
//! Both follow the same shape: ask the [`crate::resolver::Confirmer`], send
//! exactly one request, and on a success status run the
//! [`crate::resolver::ReloadHook`] once. A non-success status is an outcome,
//! not an error; a transport failure is an error.

// region:    --- Modules

mod delete;
mod update;

pub use delete::*;
pub use update::*;

// endregion: --- Modules

/// Outcome of a confirm-gated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
	/// The user declined the confirmation prompt; no request was sent.
	Declined,
	/// The backend accepted the mutation; the reload hook ran once.
	Applied,
	/// The backend answered with this non-success status; no reload.
	Rejected(u16),
}
