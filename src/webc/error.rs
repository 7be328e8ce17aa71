use derive_more::{Display, From};
use reqwest::StatusCode;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From, Display)]
pub enum Error {
	/// The backend answered, but not with a success status.
	#[display("response status {status} from '{url}'")]
	ResponseFailedStatus {
		url: String,
		status: StatusCode,
		body: String,
	},

	#[from]
	#[display("failed to deserialize response body: {_0}")]
	ResponseFailedDeserialize(serde_json::Error),

	#[from]
	#[display("{_0}")]
	Reqwest(reqwest::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
