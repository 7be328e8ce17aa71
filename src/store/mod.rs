//! Typed surface of the e-store REST backend: products, orders and users.
//!
//! The DTOs mirror the backend's response/request shapes (camelCase wire
//! names). Unlike the `action` handlers, every call here requires a success
//! status and deserializes the JSON body.

// region:    --- Modules

mod order;
mod product;
mod user;

pub use order::*;
pub use product::*;
pub use user::*;

// endregion: --- Modules
