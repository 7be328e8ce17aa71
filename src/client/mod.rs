// region:    --- Modules

mod builder;
mod config;

pub use builder::*;
pub use config::*;

use crate::resolver::{Confirmer, Endpoint, ReloadHook};
use crate::webc::WebClient;
use crate::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

// endregion: --- Modules

/// The e-store client, and the single entry point of this crate.
///
/// It is cheap to clone; all clones share the same reqwest connection pool and
/// the same [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct Client {
	inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
	web_client: WebClient,
	config: ClientConfig,
}

/// Constructors
impl Client {
	#[must_use]
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}

	pub(crate) fn from_parts(web_client: WebClient, config: ClientConfig) -> Self {
		Self {
			inner: Arc::new(ClientInner { web_client, config }),
		}
	}
}

impl Default for Client {
	fn default() -> Self {
		Self::builder().build()
	}
}

/// Getters
impl Client {
	#[must_use]
	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}

	pub(crate) fn web_client(&self) -> &WebClient {
		&self.inner.web_client
	}

	pub(crate) fn confirmer(&self) -> Confirmer {
		self.config().confirmer().cloned().unwrap_or_default()
	}

	pub(crate) fn reload_hook(&self) -> ReloadHook {
		self.config().reload_hook().cloned().unwrap_or_default()
	}

	fn endpoint(&self) -> Endpoint {
		self.config().endpoint().cloned().unwrap_or_else(Endpoint::from_env_or_default)
	}

	/// Absolute URLs go out untouched; relative paths are joined onto the
	/// resolved endpoint.
	pub(crate) fn resolve_url(&self, url_or_path: &str) -> String {
		if url_or_path.starts_with("http://") || url_or_path.starts_with("https://") {
			url_or_path.to_string()
		} else {
			self.endpoint().url_for(url_or_path)
		}
	}
}

/// Json helpers shared by the typed store calls.
/// All of them require a success status; see the `action` module for the
/// status-tolerant delete/update handlers.
impl Client {
	pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		let url = self.resolve_url(path);
		let res = self.web_client().do_get(&url).await?.require_success()?;
		Ok(res.json()?)
	}

	pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
		&self,
		path: &str,
		query: &[(&str, &str)],
	) -> Result<T> {
		let url = self.resolve_url(path);
		let res = self.web_client().do_get_with_query(&url, query).await?.require_success()?;
		Ok(res.json()?)
	}

	pub(crate) async fn post_json<T: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> Result<T> {
		let url = self.resolve_url(path);
		let res = self.web_client().do_post(&url, body).await?.require_success()?;
		Ok(res.json()?)
	}

	pub(crate) async fn put_json<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
		let url = self.resolve_url(path);
		let res = self.web_client().do_put(&url, body).await?.require_success()?;
		Ok(res.json()?)
	}

	pub(crate) async fn delete_ok(&self, path: &str) -> Result<()> {
		let url = self.resolve_url(path);
		self.web_client().do_delete(&url).await?.require_success()?;
		Ok(())
	}
}
