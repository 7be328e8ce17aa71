use crate::resolver::{Confirmer, Endpoint, ReloadHook};

/// Client configuration: backend endpoint plus the two host-environment hooks.
///
/// Unset fields fall back at call time: endpoint from `ESTORE_BASE_URL` (then
/// localhost), confirmer to always-confirm, reload hook to a no-op.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
	endpoint: Option<Endpoint>,
	confirmer: Option<Confirmer>,
	reload_hook: Option<ReloadHook>,
}

/// Setters (builder style)
impl ClientConfig {
	#[must_use]
	pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
		self.endpoint = Some(endpoint);
		self
	}

	#[must_use]
	pub fn with_confirmer(mut self, confirmer: Confirmer) -> Self {
		self.confirmer = Some(confirmer);
		self
	}

	#[must_use]
	pub fn with_reload_hook(mut self, reload_hook: ReloadHook) -> Self {
		self.reload_hook = Some(reload_hook);
		self
	}
}

/// Getters
impl ClientConfig {
	#[must_use]
	pub fn endpoint(&self) -> Option<&Endpoint> {
		self.endpoint.as_ref()
	}

	#[must_use]
	pub fn confirmer(&self) -> Option<&Confirmer> {
		self.confirmer.as_ref()
	}

	#[must_use]
	pub fn reload_hook(&self) -> Option<&ReloadHook> {
		self.reload_hook.as_ref()
	}
}
