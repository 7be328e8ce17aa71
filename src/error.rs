//! Main crate error type.

use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From, Display)]
pub enum Error {
	// -- Actions
	/// The update URL carried no numeric identifier, so no form can be located.
	#[display("no numeric identifier in update url '{url}'")]
	MissingResourceId { url: String },

	/// The URL named a form that is not present in the given `FormSet`.
	#[display("no form with id '{form_id}' in the current form set")]
	FormNotFound { form_id: String },

	// -- Modules
	#[from]
	#[display("web call error: {_0}")]
	Webc(crate::webc::Error),

	// -- Externals
	#[from]
	#[display("json error: {_0}")]
	SerdeJson(serde_json::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
