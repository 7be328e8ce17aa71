use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Continuation run once after a successful delete or update.
///
/// This is the library's rendition of the original UI's full-page reload: the
/// page is an external resource replaced wholesale, so the hook gets no
/// arguments and returns nothing. The default is a no-op.
#[derive(Clone, Default)]
pub enum ReloadHook {
	#[default]
	Noop,
	HookFn(Arc<ReloadFn>),
}

pub type ReloadFn = dyn Fn() -> BoxFuture<'static, ()> + Send + Sync;

impl ReloadHook {
	pub fn from_fn<F, Fut>(hook_fn: F) -> Self
	where
		F: Fn() -> Fut + Send + Sync + 'static,
		Fut: Future<Output = ()> + Send + 'static,
	{
		Self::HookFn(Arc::new(move || {
			let fut: BoxFuture<'static, ()> = Box::pin(hook_fn());
			fut
		}))
	}

	pub async fn run(&self) {
		match self {
			Self::Noop => (),
			Self::HookFn(hook_fn) => hook_fn().await,
		}
	}
}

// region:    --- Debug Boilerplate

impl fmt::Debug for ReloadHook {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Noop => write!(f, "ReloadHook::Noop"),
			Self::HookFn(_) => write!(f, "ReloadHook::HookFn(..)"),
		}
	}
}

// endregion: --- Debug Boilerplate
