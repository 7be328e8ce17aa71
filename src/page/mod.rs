//! Form snapshots of the currently displayed page.
//!
//! The original update handler looked a form up in the live document by its
//! element id and serialized its fields. Here the host hands the client a
//! [`FormSet`] snapshot instead; nothing in it outlives a single action call.

// region:    --- Modules

mod form_data;
mod form_set;

pub use form_data::*;
pub use form_set::*;

// endregion: --- Modules
