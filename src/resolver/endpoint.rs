use std::sync::Arc;

/// Environment variable consulted when no endpoint is set on the client config.
pub const ENDPOINT_ENV_NAME: &str = "ESTORE_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// A construct to store the base URL of the e-store backend.
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}

	/// Resolve from `ESTORE_BASE_URL`, falling back to the backend's default
	/// local address.
	#[must_use]
	pub fn from_env_or_default() -> Self {
		match std::env::var(ENDPOINT_ENV_NAME) {
			Ok(url) => Self::from_owned(url),
			Err(_) => Self::from_static(DEFAULT_BASE_URL),
		}
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}

	/// Join a path onto the base URL, normalizing the joining slash.
	#[must_use]
	pub fn url_for(&self, path: &str) -> String {
		let base = self.inner.trim_end_matches('/');
		let path = path.trim_start_matches('/');
		format!("{base}/{path}")
	}
}

// region:    --- Tests


// endregion: --- Tests
