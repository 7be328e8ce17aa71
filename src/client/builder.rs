use crate::client::{Client, ClientConfig};
use crate::resolver::{Confirmer, Endpoint, ReloadHook};
use crate::webc::WebClient;

/// Builder for [`Client`].
///
/// Everything is optional: the default client confirms every prompt, reloads
/// nothing, and resolves its endpoint from the environment.
#[derive(Debug, Default)]
pub struct ClientBuilder {
	config: ClientConfig,
	reqwest_client: Option<reqwest::Client>,
}

/// Setters
impl ClientBuilder {
	#[must_use]
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = config;
		self
	}

	#[must_use]
	pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
		self.config = self.config.with_endpoint(endpoint);
		self
	}

	#[must_use]
	pub fn with_confirmer(mut self, confirmer: Confirmer) -> Self {
		self.config = self.config.with_confirmer(confirmer);
		self
	}

	#[must_use]
	pub fn with_reload_hook(mut self, reload_hook: ReloadHook) -> Self {
		self.config = self.config.with_reload_hook(reload_hook);
		self
	}

	/// Bring your own `reqwest::Client` (proxies, timeouts, ...).
	#[must_use]
	pub fn with_reqwest_client(mut self, reqwest_client: reqwest::Client) -> Self {
		self.reqwest_client = Some(reqwest_client);
		self
	}
}

/// Build
impl ClientBuilder {
	#[must_use]
	pub fn build(self) -> Client {
		let web_client = self
			.reqwest_client
			.map(WebClient::from_reqwest_client)
			.unwrap_or_default();
		Client::from_parts(web_client, self.config)
	}
}
