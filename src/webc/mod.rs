//! `webc` is the thin web layer on top of reqwest shared by every call the
//! client makes. All requests go out with a `Content-Type: application/json`
//! header, matching what the backend expects.

// region:    --- Modules

mod error;
mod web_client;

pub use error::{Error, Result};
pub use web_client::*;

// endregion: --- Modules
