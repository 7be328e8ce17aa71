//! Resolvers connect the client to its host environment.
//!
//! - [`Endpoint`] names the backend base URL (explicit, env, or localhost).
//! - [`Confirmer`] stands in for the blocking confirmation dialog that gates
//!   every mutating action.
//! - [`ReloadHook`] stands in for the full-page reload the original UI did
//!   after a successful mutation; the host re-fetches whatever it displays.

// region:    --- Modules

mod confirmer;
mod endpoint;
mod reload_hook;

pub use confirmer::*;
pub use endpoint::*;
pub use reload_hook::*;

// endregion: --- Modules
