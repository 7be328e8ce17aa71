use crate::webc::{Error, Result};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Thin wrapper over a shared `reqwest::Client`.
///
/// Note: `WebClient` does not interpret the response status; it hands back a
/// [`WebResponse`] for any answered request. The delete/update actions look at
/// the status themselves, the typed calls go through
/// [`WebResponse::require_success`].
#[derive(Debug, Clone, Default)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
}

/// Constructors
impl WebClient {
	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		Self { reqwest_client }
	}
}

/// Web methods
impl WebClient {
	pub async fn do_get(&self, url: &str) -> Result<WebResponse> {
		self.exec(Method::GET, url, &[], None).await
	}

	pub async fn do_get_with_query(&self, url: &str, query: &[(&str, &str)]) -> Result<WebResponse> {
		self.exec(Method::GET, url, query, None).await
	}

	pub async fn do_post(&self, url: &str, body: Option<Value>) -> Result<WebResponse> {
		self.exec(Method::POST, url, &[], body).await
	}

	pub async fn do_put(&self, url: &str, body: Value) -> Result<WebResponse> {
		self.exec(Method::PUT, url, &[], Some(body)).await
	}

	/// DELETE goes out with the JSON content type and an empty body.
	pub async fn do_delete(&self, url: &str) -> Result<WebResponse> {
		self.exec(Method::DELETE, url, &[], None).await
	}

	async fn exec(&self, method: Method, url: &str, query: &[(&str, &str)], body: Option<Value>) -> Result<WebResponse> {
		debug!(%method, url, "executing web request");

		let mut reqwest_builder = self
			.reqwest_client
			.request(method, url)
			.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

		if !query.is_empty() {
			reqwest_builder = reqwest_builder.query(query);
		}

		if let Some(body) = body {
			reqwest_builder = reqwest_builder.body(body.to_string());
		}

		let res = reqwest_builder.send().await?;
		let status = res.status();
		let body = res.text().await?;

		Ok(WebResponse {
			url: url.to_string(),
			status,
			body,
		})
	}
}

// region:    --- WebResponse

/// The raw answer of a single web call: status plus body text.
#[derive(Debug, Clone)]
pub struct WebResponse {
	pub url: String,
	pub status: StatusCode,
	pub body: String,
}

impl WebResponse {
	#[must_use]
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}

	/// Turn a non-success status into a typed error, keeping url/status/body.
	pub fn require_success(self) -> Result<Self> {
		if self.status.is_success() {
			Ok(self)
		} else {
			Err(Error::ResponseFailedStatus {
				url: self.url,
				status: self.status,
				body: self.body,
			})
		}
	}

	pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
		Ok(serde_json::from_str(&self.body)?)
	}
}

// endregion: --- WebResponse
