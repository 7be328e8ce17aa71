//! The `estore-client` crate is an async Rust client for the e-store REST
//! backend.
//!
//! [`Client`] is the single entry point:
//! - the confirm-gated admin actions ported from the store UI
//!   ([`Client::delete_item`] and [`Client::update_item`], see [`action`]),
//! - the typed endpoints for products, orders and users (see [`store`]).
//!
//! The confirmation dialog and the page reload of the original UI are modeled
//! as hooks on the [`ClientConfig`] (see [`resolver`]). By default confirmation
//! is granted and reload is a no-op, which suits non-interactive callers;
//! interactive hosts wire their own prompt and re-render there.

// region:    --- Modules

mod client;
mod error;

pub use client::*;
pub use error::{Error, Result};

pub mod action;
pub mod page;
pub mod resolver;
pub mod store;
pub mod webc;

// endregion: --- Modules
